//! Registration Form
//!
//! This demo drives the form the way a user would: typing into widgets,
//! submitting, reading inline errors, fixing them and submitting again.
//!
//! Run with: RUST_LOG=debug cargo run --example registration

use signup_form::core::Field;
use signup_form::form::{FieldWidget, FormController, FormView, LoggingSink, SubmitOutcome};
use tracing_subscriber::EnvFilter;

fn type_all(form: &mut FormController<LoggingSink>, values: [&str; 4]) {
    for (field, value) in Field::ALL.into_iter().zip(values) {
        FieldWidget::new(field).input(form, value);
    }
}

fn submit_and_show(form: &mut FormController<LoggingSink>) {
    match form.submit() {
        SubmitOutcome::Accepted => println!("  -> accepted\n"),
        SubmitOutcome::Rejected { fields } => {
            println!("  -> rejected ({} field(s))\n", fields.len());
            println!("{}\n", FormView::render(form));
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Registration Form ===\n");

    let mut form = FormController::new(LoggingSink);
    println!("{}\n", FormView::render(&form));

    println!("Attempt 1: everything wrong");
    type_all(&mut form, ["", "not-an-email", "weak", "different"]);
    submit_and_show(&mut form);

    println!("Attempt 2: passwords differ");
    type_all(&mut form, ["Ana", "ana@example.com", "longenough1", "longenough2"]);
    submit_and_show(&mut form);

    println!("Attempt 3: fixed");
    FieldWidget::new(Field::ConfirmPassword).input(&mut form, "longenough1");
    submit_and_show(&mut form);

    println!("Form after submit:\n{}", FormView::render(&form));
    println!("\nSubmit attempts: {}", form.state().submit_count);
}
