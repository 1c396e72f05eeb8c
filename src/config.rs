//! Translator configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::schema::FieldKind;

/// How the fields of two forms are paired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Field `i` of the source pairs with field `i` of the destination.
    ByShape,
    /// Fields pair up through a shared reference id.
    ByRef,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::ByShape
    }
}

/// Which field types are translated through their answer options.
///
/// Each variant is a fixed registration table; fields of any other type pass responses
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceTypes {
    /// `multiple_choice` only.
    MultipleChoiceOnly,
    /// `multiple_choice`, `opinion_scale` and `rating`.
    Scales,
}

impl ChoiceTypes {
    pub fn registers(self, kind: &FieldKind) -> bool {
        match (self, kind) {
            (_, FieldKind::MultipleChoice) => true,
            (ChoiceTypes::Scales, FieldKind::OpinionScale) | (ChoiceTypes::Scales, FieldKind::Rating) => true,
            _ => false,
        }
    }
}

impl Default for ChoiceTypes {
    fn default() -> Self {
        ChoiceTypes::MultipleChoiceOnly
    }
}

/// Configuration for building a form translator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub alignment: Alignment,
    pub choice_types: ChoiceTypes,
}

impl TranslatorConfig {
    pub fn by_shape() -> Self {
        Self {
            alignment: Alignment::ByShape,
            ..Self::default()
        }
    }

    pub fn by_ref() -> Self {
        Self {
            alignment: Alignment::ByRef,
            ..Self::default()
        }
    }

    pub fn with_choice_types(mut self, choice_types: ChoiceTypes) -> Self {
        self.choice_types = choice_types;
        self
    }

    /// Parse from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file. A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }
}
