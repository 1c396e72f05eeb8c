//! Error types for translator construction and response translation.

use thiserror::Error;

/// Errors resolving the answers of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The field declares no choices.
    #[error("multiple choice question with no answer options (ref: {field_ref})")]
    MissingChoices { field_ref: String },

    /// The lettered list in the title does not line up with the declared placeholder labels.
    #[error(
        "could not extract values for labels {declared:?} from question {title:?} (ref: {field_ref}); found {extracted:?}"
    )]
    ExtractionMismatch {
        field_ref: String,
        title: String,
        declared: Vec<String>,
        extracted: Vec<String>,
    },
}

/// Errors building a field or form translator. Any of these aborts the whole build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("could not create translator for field {src_ref} to field {dst_ref}: {source}")]
    Field {
        src_ref: String,
        dst_ref: String,
        #[source]
        source: ResolveError,
    },

    #[error(
        "could not create translator for field {src_ref} to field {dst_ref}: different length answers ({src_len} vs {dst_len})"
    )]
    AnswerCountMismatch {
        src_ref: String,
        dst_ref: String,
        src_len: usize,
        dst_len: usize,
    },

    #[error("forms have different lengths ({src_len} vs {dst_len})")]
    ShapeMismatch { src_len: usize, dst_len: usize },

    #[error("could not find field ref {field_ref} in form titled {form_title:?}")]
    RefNotFound { field_ref: String, form_title: String },
}

/// Errors translating a recorded response with a built table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("ref {field_ref} not found in translation mapping")]
    RefNotFound { field_ref: String },
}

/// Errors decoding a cached table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("passthrough field carries a mapping of {len} answers")]
    PassthroughWithMapping { len: usize },
}

/// Errors reading a translator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translator config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type ResolveResult<T> = Result<T, ResolveError>;
pub type BuildResult<T> = Result<T, BuildError>;
pub type TranslateResult<T> = Result<T, TranslateError>;
