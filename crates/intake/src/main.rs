//! `getaway-intake` -- terminal front end for the inquiry wizard.
//!
//! Renders each step from the declarative step schemas, feeds answers
//! through the wizard session, and submits the finished draft to the
//! inquiry service.  A failed submission keeps the draft so the
//! traveller can retry.
//!
//! # Environment variables
//!
//! | Variable                   | Required | Default | Description                              |
//! |----------------------------|----------|---------|------------------------------------------|
//! | `INTAKE_API_URL`           | yes      | --      | Inquiry service base URL, e.g. `http://localhost:8000` |
//! | `INTAKE_HTTP_TIMEOUT_SECS` | no       | `30`    | Per-request timeout for the create call  |

use std::io::Write;
use std::time::Duration;

use getaway_client::InquiryApi;
use getaway_core::session::WizardSession;
use getaway_core::steps::{FieldKind, FieldSpec, TOTAL_STEPS};
use getaway_core::submit::{SubmitError, SubmitPipeline};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "getaway_intake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = std::env::var("INTAKE_API_URL").unwrap_or_else(|_| {
        tracing::error!("INTAKE_API_URL environment variable is required");
        std::process::exit(1);
    });

    let timeout_secs: u64 = std::env::var("INTAKE_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    tracing::info!(api_url = %api_url, timeout_secs, "Starting getaway-intake");

    let api = InquiryApi::with_timeout(api_url, Duration::from_secs(timeout_secs));
    let pipeline = SubmitPipeline::new(api);
    let mut session = WizardSession::new();

    println!("Plan your getaway — answer what you like, skip what you don't.");

    loop {
        let step = session.current_step();
        println!(
            "\n── Step {}/{}: {} ──",
            step.to_number(),
            TOTAL_STEPS,
            step.label()
        );

        for field in step.schema() {
            prompt_field(&mut session, field);
        }

        if step.to_number() < TOTAL_STEPS {
            match prompt("\n[Enter] continue · b back · q quit > ").as_str() {
                "b" => session.prev(),
                "q" => return,
                _ => session.next(),
            }
            continue;
        }

        // Last step: hand off to the pipeline.
        match prompt("\n[Enter] submit · b back · q quit > ").as_str() {
            "b" => {
                session.prev();
                continue;
            }
            "q" => return,
            _ => {}
        }

        match pipeline.submit(session.draft()).await {
            Ok(created) => {
                tracing::info!(inquiry_id = %created.id, "Inquiry submitted");
                println!("\nThank you! Your inquiry reference is {}.", created.id);
                session.reset();
                return;
            }
            Err(SubmitError::MissingFields(fields)) => {
                println!("\nStill needed before we can submit: {}", fields.join(", "));
            }
            Err(SubmitError::InFlight) => {
                // Another submission is outstanding; nothing to do.
            }
            Err(SubmitError::Transport(e)) => {
                tracing::warn!(error = %e, "Submission failed");
                println!("\nSomething went wrong sending your inquiry — your answers are saved, please try again.");
            }
        }
    }
}

/// Prompt for one field until the traveller gives a valid answer or
/// skips it.  Multi-choice fields keep toggling until an empty line.
fn prompt_field(session: &mut WizardSession, field: &FieldSpec) {
    let hint = match field.kind {
        FieldKind::Text | FieldKind::LongText => String::new(),
        FieldKind::Number => " (number)".to_string(),
        FieldKind::EnumSingle(options) => format!(" [{}]", options.join("/")),
        FieldKind::EnumMulti(options) => format!(" [{}; repeat to toggle]", options.join("/")),
        FieldKind::Bool => " [true/false]".to_string(),
    };
    let marker = if field.required { " *" } else { "" };

    loop {
        let input = prompt(&format!("{}{}{}: ", field.label, marker, hint));
        if input.is_empty() {
            return;
        }

        match session.set_field(field.key, &input) {
            Ok(()) => {
                if !matches!(field.kind, FieldKind::EnumMulti(_)) {
                    return;
                }
                // Keep accepting toggles until an empty line.
            }
            Err(e) => println!("  {e}"),
        }
    }
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(text: &str) -> String {
    print!("{text}");
    std::io::stdout().flush().ok();

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}
