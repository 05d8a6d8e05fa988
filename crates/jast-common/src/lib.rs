//! Common types and utilities for the jast crates.
//!
//! This crate provides foundational types used across all jast crates:
//! - Source ranges (`TextRange`) and line/column lookup (`LineMap`, `Position`)
//! - Diagnostic records, message templates and codes
//! - Language levels (`LanguageLevel`)

// Source location tracking (character offsets)
pub mod span;
pub use span::{LineMap, Position, TextRange};

// Diagnostics shared by validation passes
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message,
};

// Language level gating
pub mod language;
pub use language::LanguageLevel;
