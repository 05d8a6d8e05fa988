//! Tracing setup for programs built on jast.
//!
//! Library code only emits `tracing` events (the mutation protocol and the
//! notification dispatch at `trace`, validation and resolution at `debug`).
//! A binary, test or benchmark installs a subscriber with `init_tracing`.
//!
//! `JAST_LOG` (or `RUST_LOG`) selects what is recorded and `JAST_LOG_FORMAT`
//! selects how it is printed:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented output from `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! JAST_LOG=jast_ast=trace JAST_LOG_FORMAT=tree cargo test -p jast-ast
//! JAST_LOG=jast_validate=debug JAST_LOG_FORMAT=json my-tool
//! ```
//!
//! Nothing is installed when neither variable is set.

use std::str::FromStr;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "JAST_LOG";
pub const LOG_FORMAT_ENV: &str = "JAST_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(LogFormat::Text),
            "tree" => Ok(LogFormat::Tree),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}'; expected text, tree or json")),
        }
    }
}

impl LogFormat {
    /// The format named by `JAST_LOG_FORMAT`. Unknown names fall back to text.
    pub fn from_env() -> LogFormat {
        std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

/// Filter directives from `JAST_LOG`, else `RUST_LOG`. `None` when neither
/// is set.
pub fn filter_from_env() -> Option<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() => Some(EnvFilter::from_default_env()),
        Err(_) => None,
    }
}

/// Install the global subscriber. Returns whether one was installed; `false`
/// when logging is not requested or another subscriber is already set.
///
/// Output goes to stderr.
pub fn init_tracing() -> bool {
    let Some(filter) = filter_from_env() else {
        return false;
    };
    init_with(filter, LogFormat::from_env())
}

pub fn init_with(filter: EnvFilter, format: LogFormat) -> bool {
    match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).try_init().is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init().is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tests;
