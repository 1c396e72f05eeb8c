//! Per-field translators.
//!
//! A [`FieldTranslator`] maps the response labels of a source field to the values of the
//! corresponding destination field. Answers correspond by position: the two fields are
//! usually in different languages, so only the declaration order can be trusted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::TryFrom;
use tracing::debug;

use crate::answer::{resolve_answers, Answer};
use crate::config::ChoiceTypes;
use crate::errors::{BuildError, BuildResult, TableError};
use crate::schema::Field;

/// Translation policy and label mapping for one field.
///
/// A passthrough translator never carries a mapping; decoding one that does fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldTranslator")]
pub struct FieldTranslator {
    translate: bool,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    mapping: HashMap<String, String>,
}

#[derive(Deserialize)]
struct RawFieldTranslator {
    translate: bool,
    #[serde(default)]
    mapping: HashMap<String, String>,
}

impl TryFrom<RawFieldTranslator> for FieldTranslator {
    type Error = TableError;

    fn try_from(raw: RawFieldTranslator) -> Result<Self, Self::Error> {
        if !raw.translate && !raw.mapping.is_empty() {
            return Err(TableError::PassthroughWithMapping {
                len: raw.mapping.len(),
            });
        }
        Ok(Self {
            translate: raw.translate,
            mapping: raw.mapping,
        })
    }
}

impl FieldTranslator {
    /// A translator that hands every response back unchanged.
    pub fn passthrough() -> Self {
        Self::default()
    }

    pub fn translating(mapping: HashMap<String, String>) -> Self {
        Self {
            translate: true,
            mapping,
        }
    }

    pub fn translates(&self) -> bool {
        self.translate
    }

    pub fn mapping(&self) -> &HashMap<String, String> {
        &self.mapping
    }

    /// Resolve one response. `None` means the field translates but `raw` is not one of its
    /// labels.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> Option<&'a str> {
        if !self.translate {
            return Some(raw);
        }
        self.mapping.get(raw).map(String::as_str)
    }
}

/// Build the translator for `src` → `dst` with the default registration table.
pub fn build_field_translator(src: &Field, dst: &Field) -> BuildResult<FieldTranslator> {
    build_field_translator_with(src, dst, ChoiceTypes::default())
}

/// Build the translator for `src` → `dst`.
///
/// Fields whose type is not registered in `choice_types` get a passthrough translator;
/// that is not an error.
pub fn build_field_translator_with(
    src: &Field,
    dst: &Field,
    choice_types: ChoiceTypes,
) -> BuildResult<FieldTranslator> {
    if !choice_types.registers(&src.kind) {
        debug!(src_ref = %src.reference, kind = %src.kind, "passthrough field");
        return Ok(FieldTranslator::passthrough());
    }

    let mapping = choice_mapping(src, dst)?;
    debug!(
        src_ref = %src.reference,
        dst_ref = %dst.reference,
        answers = mapping.len(),
        "built choice translator"
    );
    Ok(FieldTranslator::translating(mapping))
}

/// Zip the resolved answers of both fields: source label `i` → destination value `i`.
fn choice_mapping(src: &Field, dst: &Field) -> BuildResult<HashMap<String, String>> {
    let resolve = |field: &Field| {
        resolve_answers(field).map_err(|source| BuildError::Field {
            src_ref: src.reference.clone(),
            dst_ref: dst.reference.clone(),
            source,
        })
    };
    let src_answers = resolve(src)?;
    let dst_answers = resolve(dst)?;

    if src_answers.len() != dst_answers.len() {
        return Err(BuildError::AnswerCountMismatch {
            src_ref: src.reference.clone(),
            dst_ref: dst.reference.clone(),
            src_len: src_answers.len(),
            dst_len: dst_answers.len(),
        });
    }

    Ok(src_answers
        .into_iter()
        .zip(dst_answers)
        .map(|(s, d): (Answer, Answer)| (s.label, d.value))
        .collect())
}
