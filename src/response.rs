//! Response translation against a built [`FormTranslator`].

use tracing::debug;

use crate::errors::{TranslateError, TranslateResult};
use crate::form::FormTranslator;

/// Translate one recorded response of the field `field_ref`.
///
/// - Unknown `field_ref`: error.
/// - Field that does not translate: `raw` comes back unchanged.
/// - Field that translates: the mapped value, or `Ok(None)` when `raw` is not one of the
///   field's labels. Unmapped responses are dropped, not reported as errors.
pub fn translate_response<'a>(
    field_ref: &str,
    raw: &'a str,
    translator: &'a FormTranslator,
) -> TranslateResult<Option<&'a str>> {
    let field = translator
        .field(field_ref)
        .ok_or_else(|| TranslateError::RefNotFound {
            field_ref: field_ref.to_string(),
        })?;

    let resolved = field.resolve(raw);
    if resolved.is_none() {
        debug!(field_ref, response = raw, "response is not an answer of this field");
    }
    Ok(resolved)
}
