//! Java language levels.
//!
//! Passes that depend on the language revision (modifier validation in
//! particular) are configured from a `LanguageLevel` instead of loose flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Java language revision. Ordered oldest to newest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LanguageLevel {
    #[serde(rename = "java1_0")]
    Java1_0,
    #[serde(rename = "java1_1")]
    Java1_1,
    #[serde(rename = "java1_2")]
    Java1_2,
    #[serde(rename = "java1_3")]
    Java1_3,
    #[serde(rename = "java1_4")]
    Java1_4,
    #[serde(rename = "java5")]
    Java5,
    #[serde(rename = "java6")]
    Java6,
    #[serde(rename = "java7")]
    Java7,
    #[serde(rename = "java8")]
    Java8,
    #[serde(rename = "java9")]
    Java9,
    #[serde(rename = "java10")]
    Java10,
    #[serde(rename = "java11")]
    Java11,
    #[serde(rename = "java17")]
    Java17,
    #[serde(rename = "java21")]
    Java21,
}

impl LanguageLevel {
    /// Every level, oldest first.
    pub const ALL: &'static [LanguageLevel] = &[
        LanguageLevel::Java1_0,
        LanguageLevel::Java1_1,
        LanguageLevel::Java1_2,
        LanguageLevel::Java1_3,
        LanguageLevel::Java1_4,
        LanguageLevel::Java5,
        LanguageLevel::Java6,
        LanguageLevel::Java7,
        LanguageLevel::Java8,
        LanguageLevel::Java9,
        LanguageLevel::Java10,
        LanguageLevel::Java11,
        LanguageLevel::Java17,
        LanguageLevel::Java21,
    ];

    /// The newest supported level.
    pub const CURRENT: LanguageLevel = LanguageLevel::Java21;

    /// The release name, as written in build files (`1.4`, `8`, `17`).
    pub fn release(self) -> &'static str {
        match self {
            LanguageLevel::Java1_0 => "1.0",
            LanguageLevel::Java1_1 => "1.1",
            LanguageLevel::Java1_2 => "1.2",
            LanguageLevel::Java1_3 => "1.3",
            LanguageLevel::Java1_4 => "1.4",
            LanguageLevel::Java5 => "5",
            LanguageLevel::Java6 => "6",
            LanguageLevel::Java7 => "7",
            LanguageLevel::Java8 => "8",
            LanguageLevel::Java9 => "9",
            LanguageLevel::Java10 => "10",
            LanguageLevel::Java11 => "11",
            LanguageLevel::Java17 => "17",
            LanguageLevel::Java21 => "21",
        }
    }

    #[inline]
    pub fn is_at_least(self, other: LanguageLevel) -> bool {
        self >= other
    }
}

impl Default for LanguageLevel {
    fn default() -> Self {
        LanguageLevel::Java11
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Java {}", self.release())
    }
}

/// Error returned when a release name does not match any known level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLanguageLevel(pub String);

impl fmt::Display for UnknownLanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language level '{}'", self.0)
    }
}

impl std::error::Error for UnknownLanguageLevel {}

impl FromStr for LanguageLevel {
    type Err = UnknownLanguageLevel;

    /// Accepts `8`, `1.8`, `java8` and `JAVA_8` style spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', ".");
        let release = normalized
            .strip_prefix("java")
            .map(|rest| rest.trim_start_matches('.'))
            .unwrap_or(&normalized);
        let release = match release {
            "1.5" => "5",
            "1.6" => "6",
            "1.7" => "7",
            "1.8" => "8",
            other => other,
        };
        LanguageLevel::ALL
            .iter()
            .copied()
            .find(|level| level.release() == release)
            .ok_or_else(|| UnknownLanguageLevel(s.to_string()))
    }
}

#[cfg(test)]
#[path = "../tests/language_tests.rs"]
mod tests;
