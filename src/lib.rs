//! Translate survey responses between two versions of the same form.
//!
//! Two renderings of a questionnaire (typically in two languages) declare the same
//! multiple-choice questions in the same order. This crate aligns their answer options and
//! resolves a response recorded against one version to the equivalent value in the other.
//!
//! ## Building a table
//!
//! - [`extract_labels`] - Reads `A. foo` style option lists out of a question title
//! - [`resolve_answers`] - Resolves the `(label, value)` answers of one field
//! - [`build_field_translator`] - Maps source labels to destination values by position
//! - [`build_form_translator_by_shape`] / [`build_form_translator_by_ref`] - Pairs the fields
//!   of two forms and builds a [`FormTranslator`]
//!
//! ## Using a table
//!
//! - [`translate_response`] - Resolves one raw response through a built [`FormTranslator`]
//! - [`FormTranslatorDisplay`] - Renders a table for review
//!
//! ## Example
//!
//! ```
//! use form_trans::{build_form_translator_by_shape, translate_response, Field, Form};
//!
//! let hindi = Form::new("hi", vec![
//!     Field::new("gender", "multiple_choice", "आपका लिंग क्या है?")
//!         .with_choices(vec!["पुरुष", "महिला", "अन्य"]),
//! ]);
//! let english = Form::new("en", vec![
//!     Field::new("gender", "multiple_choice", "What is your gender?")
//!         .with_choices(vec!["Male", "Female", "Other"]),
//! ]);
//!
//! let table = build_form_translator_by_shape(&hindi, &english).unwrap();
//! assert_eq!(translate_response("gender", "महिला", &table).unwrap(), Some("Female"));
//! ```

mod answer;
mod config;
mod display;
mod errors;
mod extract;
mod field;
mod form;
mod response;
mod schema;

pub use answer::{resolve_answers, Answer};
pub use config::{Alignment, ChoiceTypes, TranslatorConfig};
pub use display::FormTranslatorDisplay;
pub use errors::{
    BuildError, BuildResult, ConfigError, ResolveError, ResolveResult, TableError, TranslateError,
    TranslateResult,
};
pub use extract::{extract_labels, Labels, LetteredLine};
pub use field::{build_field_translator, build_field_translator_with, FieldTranslator};
pub use form::{
    build_form_translator, build_form_translator_by_ref, build_form_translator_by_shape,
    FormTranslator,
};
pub use response::translate_response;
pub use schema::{Choice, Field, FieldKind, FieldProperties, Form, Workspace};
