//! The registration form: controller, widgets and submit sinks.
//!
//! Data flows one way through this module:
//! widget edit -> controller values -> (on submit) schema -> either
//! errors routed back to widgets, or the validated record sent to a sink.

pub mod controller;
pub mod error;
pub mod sink;
pub mod widget;

// Re-export commonly used types
pub use controller::{FormController, FormState, SubmitOutcome};
pub use error::FormError;
pub use sink::{CollectingSink, LoggingSink, SubmitSink};
pub use widget::{FieldWidget, FormView, WidgetView};
