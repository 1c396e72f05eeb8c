//! Text rendering of a built translation table, for review and snapshot tests.

use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

use crate::field::FieldTranslator;
use crate::form::FormTranslator;

const COLUMN_GAP: usize = 2;

/// Renders a [`FormTranslator`] as aligned text, one field per block:
///
/// ```text
/// age     (passthrough)
/// gender  Female → Femme
///         Male   → Homme
/// ```
///
/// Refs and labels are sorted so the output is stable.
pub struct FormTranslatorDisplay<'a> {
    translator: &'a FormTranslator,
    translating_only: bool,
}

impl<'a> FormTranslatorDisplay<'a> {
    pub fn new(translator: &'a FormTranslator) -> Self {
        Self {
            translator,
            translating_only: false,
        }
    }

    /// Leave passthrough fields out.
    pub fn translating_only(mut self) -> Self {
        self.translating_only = true;
        self
    }
}

fn pad(f: &mut fmt::Formatter<'_>, written: &str, width: usize) -> fmt::Result {
    for _ in UnicodeWidthStr::width(written)..width {
        f.write_char(' ')?;
    }
    Ok(())
}

fn write_mapping(f: &mut fmt::Formatter<'_>, field: &FieldTranslator, indent: usize) -> fmt::Result {
    let mut entries: Vec<_> = field.mapping().iter().collect();
    entries.sort();

    if entries.is_empty() {
        return f.write_str("(no answers)");
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);

    for (idx, (label, value)) in entries.into_iter().enumerate() {
        if idx > 0 {
            f.write_char('\n')?;
            pad(f, "", indent)?;
        }
        f.write_str(label)?;
        pad(f, label, label_width)?;
        write!(f, " → {}", value)?;
    }
    Ok(())
}

impl<'a> fmt::Display for FormTranslatorDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self
            .translator
            .fields()
            .iter()
            .filter(|(_, field)| !self.translating_only || field.translates())
            .collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let ref_width = fields
            .iter()
            .map(|(field_ref, _)| UnicodeWidthStr::width(field_ref.as_str()))
            .max()
            .unwrap_or(0);
        let indent = ref_width + COLUMN_GAP;

        for (idx, (field_ref, field)) in fields.into_iter().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            f.write_str(field_ref)?;
            pad(f, field_ref, indent)?;

            if field.translates() {
                write_mapping(f, field, indent)?;
            } else {
                f.write_str("(passthrough)")?;
            }
        }
        Ok(())
    }
}
