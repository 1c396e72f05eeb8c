//! Fixture runner: builds the translation table and checks every expectation against it.

use crate::failures::ExpectedFailures;
use crate::fixture::{ErrorKind, Expectation, TranslationFixture};
use form_trans::{build_form_translator, translate_response, BuildResult, FormTranslator};

/// Reference of the check made on the build itself.
pub const BUILD_CHECK: &str = "build";

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    /// The translation succeeded with a different result.
    Mismatch {
        expected: Option<String>,
        actual: Option<String>,
    },
    /// An error occurred where a result was expected.
    UnexpectedError { kind: ErrorKind, message: String },
    /// A result came back where an error was expected.
    MissingError { expected: ErrorKind, actual: String },
    /// The wrong kind of error occurred.
    WrongError {
        expected: ErrorKind,
        actual: ErrorKind,
        message: String,
    },
}

impl CheckOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }
}

/// Result of one check in a fixture.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// `build`, or `E<n>` for the n-th expectation (1-based).
    pub reference: String,
    pub description: String,
    pub outcome: CheckOutcome,
}

/// Results of running one fixture.
#[derive(Debug, Default)]
pub struct FixtureReport {
    pub checks: Vec<CheckResult>,
    /// The built table, when the build succeeded.
    pub translator: Option<FormTranslator>,
}

impl FixtureReport {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.outcome.is_pass()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.outcome.is_pass())
    }
}

fn build_outcome(expected: Option<ErrorKind>, built: &BuildResult<FormTranslator>) -> CheckOutcome {
    match (built, expected) {
        (Ok(_), None) => CheckOutcome::Passed,
        (Ok(translator), Some(expected)) => CheckOutcome::MissingError {
            expected,
            actual: format!("table with {} fields", translator.len()),
        },
        (Err(err), None) => CheckOutcome::UnexpectedError {
            kind: ErrorKind::of_build(err),
            message: err.to_string(),
        },
        (Err(err), Some(expected)) => {
            let actual = ErrorKind::of_build(err);
            if actual == expected {
                CheckOutcome::Passed
            } else {
                CheckOutcome::WrongError {
                    expected,
                    actual,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Check one expectation against a built table.
pub fn check_expectation(expectation: &Expectation, translator: &FormTranslator) -> CheckOutcome {
    let result = translate_response(&expectation.field, &expectation.response, translator);

    match (result, expectation.error) {
        (Ok(actual), None) => {
            if actual == expectation.value.as_deref() {
                CheckOutcome::Passed
            } else {
                CheckOutcome::Mismatch {
                    expected: expectation.value.clone(),
                    actual: actual.map(str::to_string),
                }
            }
        }
        (Ok(actual), Some(expected)) => CheckOutcome::MissingError {
            expected,
            actual: format!("{:?}", actual),
        },
        (Err(err), None) => CheckOutcome::UnexpectedError {
            kind: ErrorKind::of_translate(&err),
            message: err.to_string(),
        },
        (Err(err), Some(expected)) => {
            let actual = ErrorKind::of_translate(&err);
            if actual == expected {
                CheckOutcome::Passed
            } else {
                CheckOutcome::WrongError {
                    expected,
                    actual,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Build the fixture's table and check it.
///
/// The build is always the first check. When it does not produce a table, the
/// expectations are not run.
pub fn run_fixture(fixture: &TranslationFixture) -> FixtureReport {
    let built = build_form_translator(&fixture.source, &fixture.destination, &fixture.config);

    let mut report = FixtureReport::default();
    report.checks.push(CheckResult {
        reference: BUILD_CHECK.to_string(),
        description: match fixture.expect_build_error {
            Some(kind) => format!("build fails with {}", kind),
            None => format!("build {:?}", fixture.config.alignment),
        },
        outcome: build_outcome(fixture.expect_build_error, &built),
    });

    let translator = match built {
        Ok(translator) => translator,
        Err(_) => return report,
    };

    for (idx, expectation) in fixture.expect.iter().enumerate() {
        report.checks.push(CheckResult {
            reference: ExpectedFailures::format_ref(idx + 1),
            description: expectation.describe(),
            outcome: check_expectation(expectation, &translator),
        });
    }

    report.translator = Some(translator);
    report
}
