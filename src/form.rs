//! Form translators.
//!
//! A [`FormTranslator`] is built once per pair of forms and then used as a read-only lookup
//! table keyed by source field reference. Building is all-or-nothing: the first field that
//! fails aborts the whole build.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::config::{Alignment, ChoiceTypes, TranslatorConfig};
use crate::errors::{BuildError, BuildResult};
use crate::field::{build_field_translator_with, FieldTranslator};
use crate::schema::{Field, Form};

/// Field translators of a form, keyed by source field reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTranslator {
    fields: HashMap<String, FieldTranslator>,
}

impl FormTranslator {
    pub fn field(&self, field_ref: &str) -> Option<&FieldTranslator> {
        self.fields.get(field_ref)
    }

    pub fn fields(&self) -> &HashMap<String, FieldTranslator> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize for caching as an opaque translation table.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Pair fields by position. Both forms must have the same number of fields, counting
/// thank-you screens.
pub fn build_form_translator_by_shape(src: &Form, dst: &Form) -> BuildResult<FormTranslator> {
    build_form_translator(src, dst, &TranslatorConfig::by_shape())
}

/// Pair fields through their reference ids.
pub fn build_form_translator_by_ref(src: &Form, dst: &Form) -> BuildResult<FormTranslator> {
    build_form_translator(src, dst, &TranslatorConfig::by_ref())
}

pub fn build_form_translator(
    src: &Form,
    dst: &Form,
    config: &TranslatorConfig,
) -> BuildResult<FormTranslator> {
    match config.alignment {
        Alignment::ByShape => {
            if src.extended_len() != dst.extended_len() {
                return Err(BuildError::ShapeMismatch {
                    src_len: src.extended_len(),
                    dst_len: dst.extended_len(),
                });
            }
            let pairs = src.extended_fields().zip(dst.extended_fields()).map(Ok);
            collect_translators(pairs, config.choice_types)
        }
        Alignment::ByRef => {
            let pairs = src
                .extended_fields()
                .map(|field| find_field(&field.reference, dst).map(|found| (field, found)));
            collect_translators(pairs, config.choice_types)
        }
    }
}

/// Linear scan of the destination's extended field list.
fn find_field<'f>(field_ref: &str, form: &'f Form) -> BuildResult<&'f Field> {
    form.extended_fields()
        .find(|f| f.reference == field_ref)
        .ok_or_else(|| BuildError::RefNotFound {
            field_ref: field_ref.to_string(),
            form_title: form.title.clone(),
        })
}

fn collect_translators<'f, I>(pairs: I, choice_types: ChoiceTypes) -> BuildResult<FormTranslator>
where
    I: Iterator<Item = BuildResult<(&'f Field, &'f Field)>>,
{
    let mut fields = HashMap::new();

    for pair in pairs {
        let (src, dst) = pair?;
        debug!(src_ref = %src.reference, dst_ref = %dst.reference, "aligned fields");

        let translator = build_field_translator_with(src, dst, choice_types)?;
        if fields.insert(src.reference.clone(), translator).is_some() {
            warn!(field_ref = %src.reference, "duplicate source ref; later field wins");
        }
    }

    Ok(FormTranslator { fields })
}
