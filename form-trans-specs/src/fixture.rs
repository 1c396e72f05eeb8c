//! Core types for `.toml` translation fixtures.
//!
//! A fixture names two form exports (JSON, relative to the fixture file), how to align
//! them, and what translating responses through the resulting table should give:
//!
//! ```toml
//! title = "Hindi to English"
//! source = "forms/hindi.json"
//! destination = "forms/english.json"
//!
//! [config]
//! alignment = "by_shape"
//!
//! [[expect]]
//! field = "foo"
//! response = "महिला"
//! value = "Female"
//! ```
//!
//! An expectation without `value` or `error` expects the response to be dropped. A fixture
//! with `expect_build_error` expects building the table to fail.

use form_trans::{BuildError, Form, ResolveError, TranslateError, TranslatorConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::errors::{SpecError, SpecResult};

/// Which failure an expectation or a build is supposed to end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingChoices,
    ExtractionMismatch,
    AnswerCountMismatch,
    ShapeMismatch,
    RefNotFound,
}

impl ErrorKind {
    pub fn of_build(err: &BuildError) -> Self {
        match err {
            BuildError::Field {
                source: ResolveError::MissingChoices { .. },
                ..
            } => ErrorKind::MissingChoices,
            BuildError::Field {
                source: ResolveError::ExtractionMismatch { .. },
                ..
            } => ErrorKind::ExtractionMismatch,
            BuildError::AnswerCountMismatch { .. } => ErrorKind::AnswerCountMismatch,
            BuildError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            BuildError::RefNotFound { .. } => ErrorKind::RefNotFound,
        }
    }

    pub fn of_translate(err: &TranslateError) -> Self {
        match err {
            TranslateError::RefNotFound { .. } => ErrorKind::RefNotFound,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MissingChoices => "missing_choices",
            ErrorKind::ExtractionMismatch => "extraction_mismatch",
            ErrorKind::AnswerCountMismatch => "answer_count_mismatch",
            ErrorKind::ShapeMismatch => "shape_mismatch",
            ErrorKind::RefNotFound => "ref_not_found",
        };
        f.write_str(name)
    }
}

/// One response to translate and what it should come out as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    /// Source field reference.
    pub field: String,
    /// Raw recorded response.
    pub response: String,
    /// Expected translation; `None` means the response is dropped.
    #[serde(default)]
    pub value: Option<String>,
    /// Expected failure instead of a value.
    #[serde(default)]
    pub error: Option<ErrorKind>,
}

impl Expectation {
    /// Short human readable form, e.g. `foo: "महिला" => "Female"`.
    pub fn describe(&self) -> String {
        let outcome = match (&self.error, &self.value) {
            (Some(kind), _) => format!("error {}", kind),
            (None, Some(value)) => format!("{:?}", value),
            (None, None) => "dropped".to_string(),
        };
        format!("{}: {:?} => {}", self.field, self.response, outcome)
    }
}

/// A parsed fixture file, before its forms are loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSpec {
    #[serde(default)]
    pub title: Option<String>,
    /// Path of the source form export, relative to the fixture file.
    pub source: PathBuf,
    /// Path of the destination form export, relative to the fixture file.
    pub destination: PathBuf,
    #[serde(default)]
    pub config: TranslatorConfig,
    #[serde(default)]
    pub expect: Vec<Expectation>,
    #[serde(default)]
    pub expect_build_error: Option<ErrorKind>,
}

/// A fixture with both forms loaded.
#[derive(Debug, Clone)]
pub struct TranslationFixture {
    pub title: Option<String>,
    pub source: Form,
    pub destination: Form,
    pub config: TranslatorConfig,
    pub expect: Vec<Expectation>,
    pub expect_build_error: Option<ErrorKind>,
}

impl TranslationFixture {
    pub fn from_spec(spec: FixtureSpec, source: Form, destination: Form) -> Self {
        Self {
            title: spec.title,
            source,
            destination,
            config: spec.config,
            expect: spec.expect,
            expect_build_error: spec.expect_build_error,
        }
    }
}

/// Parse the TOML body of a fixture file.
pub fn parse_fixture(content: &str) -> SpecResult<FixtureSpec> {
    let spec: FixtureSpec = toml::from_str(content).map_err(|e| SpecError::Parse {
        message: e.to_string(),
    })?;

    if spec.expect_build_error.is_some() && !spec.expect.is_empty() {
        return Err(SpecError::Parse {
            message: "a fixture expecting a build error cannot also expect translations".to_string(),
        });
    }
    if let Some(bad) = spec.expect.iter().find(|e| e.error.is_some() && e.value.is_some()) {
        return Err(SpecError::Parse {
            message: format!("expectation for field {} has both a value and an error", bad.field),
        });
    }

    Ok(spec)
}
