//! Modifier validation for jast syntax trees.
//!
//! - `ModifierValidator`: the validation pass (a `VoidVisitor`)
//! - `ModifierSite` and the allowed-modifier tables
//! - `ModifierFeatures` / `ValidationOptions`: language-level gating
//! - `ProblemReporter`: the injected sink, with `ProblemCollector` as the
//!   in-memory implementation

pub mod config;
pub mod modifier_validator;
pub mod reporter;
pub mod tables;

pub use config::{ModifierFeatures, OptionsError, ValidationOptions};
pub use modifier_validator::ModifierValidator;
pub use reporter::{Problem, ProblemCollector, ProblemReporter};
pub use tables::ModifierSite;

use jast_ast::{NodeArena, NodeIndex};

/// Validate the modifiers under `root` and collect the problems.
pub fn validate_modifiers(arena: &NodeArena, root: NodeIndex, options: &ValidationOptions) -> ProblemCollector {
    let mut collector = ProblemCollector::new();
    ModifierValidator::from_options(options).validate(arena, root, &mut collector);
    collector
}

#[cfg(test)]
#[path = "../tests/test_support.rs"]
pub(crate) mod test_support;
