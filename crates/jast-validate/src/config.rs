//! Validation options.
//!
//! The validator is gated by three language features. They are normally
//! derived from a `LanguageLevel`; `ValidationOptions` is the serialisable
//! form, read from JSON such as:
//!
//! ```json
//! { "languageLevel": "java8", "privateInterfaceMethods": true }
//! ```

use jast_common::LanguageLevel;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Language features that change which modifiers are legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierFeatures {
    /// `strictfp` is a keyword (Java 1.2 and later).
    pub strictfp: bool,
    /// Interface methods may be `default` or `static` (Java 8 and later).
    pub default_and_static_interface_methods: bool,
    /// Interface methods may be `private` (Java 9 and later).
    pub private_interface_methods: bool,
}

impl ModifierFeatures {
    /// Every feature enabled.
    pub const ALL: ModifierFeatures = ModifierFeatures {
        strictfp: true,
        default_and_static_interface_methods: true,
        private_interface_methods: true,
    };

    pub fn for_level(level: LanguageLevel) -> ModifierFeatures {
        ModifierFeatures {
            strictfp: level.is_at_least(LanguageLevel::Java1_2),
            default_and_static_interface_methods: level.is_at_least(LanguageLevel::Java8),
            private_interface_methods: level.is_at_least(LanguageLevel::Java9),
        }
    }
}

impl From<LanguageLevel> for ModifierFeatures {
    fn from(level: LanguageLevel) -> Self {
        ModifierFeatures::for_level(level)
    }
}

/// Accepts every spelling `LanguageLevel::from_str` does (`"8"`, `"1.8"`,
/// `"java8"`), not only the canonical serde names.
fn deserialize_language_level<'de, D>(deserializer: D) -> Result<LanguageLevel, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let text = String::deserialize(deserializer)?;
    text.parse().map_err(Error::custom)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationOptions {
    #[serde(default, deserialize_with = "deserialize_language_level")]
    pub language_level: LanguageLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strictfp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_and_static_interface_methods: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_interface_methods: Option<bool>,
}

impl ValidationOptions {
    pub fn for_level(language_level: LanguageLevel) -> ValidationOptions {
        ValidationOptions {
            language_level,
            ..Default::default()
        }
    }

    /// Parse options from a JSON document.
    pub fn from_json(text: &str) -> Result<ValidationOptions, OptionsError> {
        let options: ValidationOptions = serde_json::from_str(text)?;
        options.check()?;
        Ok(options)
    }

    /// The effective features: the language level's, with explicit
    /// overrides applied.
    pub fn features(&self) -> ModifierFeatures {
        let base = ModifierFeatures::for_level(self.language_level);
        ModifierFeatures {
            strictfp: self.strictfp.unwrap_or(base.strictfp),
            default_and_static_interface_methods: self
                .default_and_static_interface_methods
                .unwrap_or(base.default_and_static_interface_methods),
            private_interface_methods: self
                .private_interface_methods
                .unwrap_or(base.private_interface_methods),
        }
    }

    /// Reject override combinations no language level has.
    fn check(&self) -> Result<(), OptionsError> {
        let features = self.features();
        if features.private_interface_methods && !features.default_and_static_interface_methods {
            return Err(OptionsError::Inconsistent(
                "privateInterfaceMethods requires defaultAndStaticInterfaceMethods",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid validation options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("inconsistent validation options: {0}")]
    Inconsistent(&'static str),
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
