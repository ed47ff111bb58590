//! Consumers of validated submissions.

use crate::core::FieldSet;
use tracing::{info, warn};

/// Receives each record that passed validation.
///
/// Any `FnMut(FieldSet)` closure is a sink.
pub trait SubmitSink {
    fn accept(&mut self, fields: FieldSet);
}

impl<F> SubmitSink for F
where
    F: FnMut(FieldSet),
{
    fn accept(&mut self, fields: FieldSet) {
        self(fields)
    }
}

/// Logs each submission at info level, with password fields redacted.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSink;

impl SubmitSink for LoggingSink {
    fn accept(&mut self, fields: FieldSet) {
        match serde_json::to_string(&fields.redacted()) {
            Ok(payload) => info!(%payload, "registration submitted"),
            Err(err) => warn!(error = %err, "failed to encode submitted registration"),
        }
    }
}

/// Keeps every accepted record in submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectingSink {
    accepted: Vec<FieldSet>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> &[FieldSet] {
        &self.accepted
    }

    pub fn last(&self) -> Option<&FieldSet> {
        self.accepted.last()
    }
}

impl SubmitSink for CollectingSink {
    fn accept(&mut self, fields: FieldSet) {
        self.accepted.push(fields);
    }
}
