//! Form schema types.
//!
//! These mirror the shape of a form export: a [`Form`] holds ordered [`Field`]s, and each
//! field declares its answer options as [`Choice`]s. Everything here is read-only input to
//! the translator builders. Unknown members of an export are ignored on decode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared answer option of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Short display text, e.g. `"Male"` or the placeholder `"A"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default, rename = "ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

impl Choice {
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// The type tag of a field.
///
/// Only the tags that take part in translation get their own variant; every other tag is
/// kept verbatim in [`FieldKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    MultipleChoice,
    OpinionScale,
    Rating,
    Other(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::MultipleChoice => "multiple_choice",
            FieldKind::OpinionScale => "opinion_scale",
            FieldKind::Rating => "rating",
            FieldKind::Other(tag) => tag,
        }
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::Other(String::new())
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "multiple_choice" => FieldKind::MultipleChoice,
            "opinion_scale" => FieldKind::OpinionScale,
            "rating" => FieldKind::Rating,
            _ => FieldKind::Other(tag),
        }
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        FieldKind::from(tag.to_string())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Other(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProperties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// One question of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Reference id, unique within a form.
    #[serde(default, rename = "ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,
    #[serde(default)]
    pub properties: FieldProperties,
}

impl Field {
    /// Create a field with the given reference, type and title and no choices.
    pub fn new(reference: impl Into<String>, kind: impl Into<FieldKind>, title: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            kind: kind.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder-style: declare the choices of this field by label.
    pub fn with_choices<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.choices = labels.into_iter().map(Choice::labelled).collect();
        self
    }

    pub fn choices(&self) -> &[Choice] {
        &self.properties.choices
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
}

/// A questionnaire: ordered fields plus optional terminal thank-you screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, rename = "thankyou_screens", skip_serializing_if = "Vec::is_empty")]
    pub thank_you_screens: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<Workspace>,
    /// Branching logic, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<serde_json::Value>,
}

impl Form {
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            fields,
            ..Self::default()
        }
    }

    /// Decode a form export.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The fields followed by the thank-you screens, which is the list alignment works on.
    pub fn extended_fields(&self) -> impl ExactSizeIterator<Item = &Field> + Clone + '_ {
        ExtendedFields {
            fields: self.fields.iter(),
            screens: self.thank_you_screens.iter(),
        }
    }

    pub fn extended_len(&self) -> usize {
        self.fields.len() + self.thank_you_screens.len()
    }
}

#[derive(Clone)]
struct ExtendedFields<'a> {
    fields: std::slice::Iter<'a, Field>,
    screens: std::slice::Iter<'a, Field>,
}

impl<'a> Iterator for ExtendedFields<'a> {
    type Item = &'a Field;

    fn next(&mut self) -> Option<Self::Item> {
        self.fields.next().or_else(|| self.screens.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.fields.len() + self.screens.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for ExtendedFields<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_field_ignores_unknown_members() {
        let field: Field = serde_json::from_str(
            r#"{"id": "YmJEQUEqh0h1",
                "properties": {"labels": {"left": "Not at all", "right": "Very"}, "steps": 5},
                "ref": "9ddb9864",
                "title": "How concerned are you?",
                "type": "opinion_scale",
                "validations": {"required": false}}"#,
        )
        .unwrap();

        assert_eq!(field.kind, FieldKind::OpinionScale);
        assert_eq!(field.reference, "9ddb9864");
        assert!(field.choices().is_empty());
    }

    #[test]
    fn test_unknown_kind_round_trips() {
        let field: Field = serde_json::from_str(r#"{"type": "short_text", "ref": "x"}"#).unwrap();
        assert_eq!(field.kind, FieldKind::Other("short_text".to_string()));

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "short_text");
    }

    #[test]
    fn test_thank_you_screens_extend_fields() {
        let form = Form::from_json(
            r#"{"title": "Survey",
                "fields": [{"ref": "a", "type": "number"}, {"ref": "b", "type": "number"}],
                "thankyou_screens": [{"ref": "default_tys", "title": "Done!",
                                      "properties": {"show_button": false}}]}"#,
        )
        .unwrap();

        let refs: Vec<_> = form.extended_fields().map(|f| f.reference.as_str()).collect();
        assert_eq!(refs, vec!["a", "b", "default_tys"]);
        assert_eq!(form.extended_len(), 3);
        assert_eq!(form.extended_fields().len(), 3);
        // The form itself is untouched.
        assert_eq!(form.fields.len(), 2);
    }

    #[test]
    fn test_missing_type_is_unregistered() {
        let field: Field = serde_json::from_str(r#"{"ref": "default_tys"}"#).unwrap();
        assert_eq!(field.kind, FieldKind::Other(String::new()));
    }
}
