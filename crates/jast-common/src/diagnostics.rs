//! Diagnostic types and message lookup for validation passes.
//!
//! Messages are templates with `{0}`, `{1}`, ... placeholders; use
//! `format_message()` to fill them in.

use crate::span::{LineMap, TextRange};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

impl DiagnosticCategory {
    pub fn name(self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A diagnostic produced by a pass over a syntax tree.
///
/// `start`/`length` are zero when the offending node carries no source range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(file: String, start: u32, length: u32, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
        }
    }

    /// Create a diagnostic from a message definition and an optional range.
    #[must_use]
    pub fn from_message(
        file: impl Into<String>,
        range: Option<TextRange>,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        let range = range.unwrap_or_default();
        Self {
            file: file.into(),
            start: range.pos,
            length: range.len(),
            message_text: format_message(message.message, args),
            category: message.category,
            code: message.code,
        }
    }

    /// Format as `file(line,col): error JV1001: message` using a line map.
    pub fn format(&self, line_map: &LineMap) -> String {
        let pos = line_map.position(self.start);
        format!(
            "{}({},{}): {} JV{}: {}",
            self.file,
            pos.line + 1,
            pos.character + 1,
            self.category,
            self.code,
            self.message_text
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[JV{}]: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const CAN_HAVE_ONLY_ONE_OF: u32 = 1001;
    pub const MODIFIER_NOT_ALLOWED_HERE: u32 = 1002;
    pub const CANNOT_BE_ABSTRACT_AND_ALSO: u32 = 1003;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const CAN_HAVE_ONLY_ONE_OF: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::CAN_HAVE_ONLY_ONE_OF,
        category: DiagnosticCategory::Error,
        message: "Can have only one of {0}.",
    };
    pub const MODIFIER_NOT_ALLOWED_HERE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::MODIFIER_NOT_ALLOWED_HERE,
        category: DiagnosticCategory::Error,
        message: "'{0}' is not allowed here.",
    };
    pub const CANNOT_BE_ABSTRACT_AND_ALSO: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::CANNOT_BE_ABSTRACT_AND_ALSO,
        category: DiagnosticCategory::Error,
        message: "Cannot be 'abstract' and also {0}.",
    };

    pub const ALL: &[DiagnosticMessage] = &[
        CAN_HAVE_ONLY_ONE_OF,
        MODIFIER_NOT_ALLOWED_HERE,
        CANNOT_BE_ABSTRACT_AND_ALSO,
    ];
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    diagnostic_messages::ALL.iter().find(|m| m.code == code)
}

/// Quote each item and join them the way messages list modifiers: `'a', 'b'`.
pub fn quoted_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
