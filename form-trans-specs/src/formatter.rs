//! Failure and summary formatting.

use crate::runner::{CheckOutcome, CheckResult};
use std::fmt::Write;

fn show(value: &Option<String>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => "(dropped)".to_string(),
    }
}

/// Format a failed check with its context.
pub fn format_failure(fixture_name: &str, check: &CheckResult) -> String {
    let mut output = String::new();

    writeln!(output, "\nFAIL: {} [{}]", fixture_name, check.reference).unwrap();
    writeln!(output, "  {}", check.description).unwrap();
    writeln!(output).unwrap();

    match &check.outcome {
        CheckOutcome::Mismatch { expected, actual } => {
            writeln!(
                output,
                "  \u{2717} expected {}, found {}",
                show(expected),
                show(actual)
            )
            .unwrap();
        }
        CheckOutcome::UnexpectedError { kind, message } => {
            writeln!(output, "  unexpected {}: {}", kind, message).unwrap();
        }
        CheckOutcome::MissingError { expected, actual } => {
            writeln!(output, "  expected {}, got {}", expected, actual).unwrap();
        }
        CheckOutcome::WrongError {
            expected,
            actual,
            message,
        } => {
            writeln!(output, "  expected {}, got {}: {}", expected, actual, message).unwrap();
        }
        CheckOutcome::Passed => {
            writeln!(output, "  (passed)").unwrap();
        }
    }

    if let Some(hint) = generate_hint(&check.outcome) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary of one fixture's results.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

fn generate_hint(outcome: &CheckOutcome) -> Option<String> {
    use crate::fixture::ErrorKind;

    match outcome {
        CheckOutcome::Mismatch { actual: None, .. } => Some(
            "the response is not one of the field's labels; lettered fields answer with the letter"
                .to_string(),
        ),
        CheckOutcome::UnexpectedError {
            kind: ErrorKind::ExtractionMismatch,
            ..
        } => Some("check that every lettered line starts on its own line with a separator".to_string()),
        CheckOutcome::UnexpectedError {
            kind: ErrorKind::ShapeMismatch,
            ..
        } => Some("thank-you screens count toward the field total; try alignment = \"by_ref\"".to_string()),
        _ => None,
    }
}
