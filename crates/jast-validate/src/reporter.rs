//! Problem reporting.
//!
//! Validation passes never fail; they hand each finding to an injected
//! `ProblemReporter` and keep walking.

use jast_ast::NodeIndex;
use jast_common::{Diagnostic, DiagnosticCategory, DiagnosticMessage, TextRange, format_message};
use serde::Serialize;

/// One finding: the node it is about, where it is in the source (if known),
/// and the formatted message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub node: NodeIndex,
    pub range: Option<TextRange>,
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: String,
}

impl Problem {
    pub fn new(
        node: NodeIndex,
        range: Option<TextRange>,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Problem {
        Problem {
            node,
            range,
            code: message.code,
            category: message.category,
            message: format_message(message.message, args),
        }
    }

    /// Convert to a file diagnostic. Problems without a range point at the
    /// start of the file.
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        let range = self.range.unwrap_or_default();
        Diagnostic {
            file: file.to_string(),
            start: range.pos,
            length: range.len(),
            message_text: self.message.clone(),
            category: self.category,
            code: self.code,
        }
    }
}

/// Sink for problems found by a pass.
pub trait ProblemReporter {
    fn report(&mut self, problem: Problem);
}

impl ProblemReporter for Vec<Problem> {
    fn report(&mut self, problem: Problem) {
        self.push(problem);
    }
}

/// Collects problems in report order.
#[derive(Clone, Debug, Default)]
pub struct ProblemCollector {
    problems: Vec<Problem>,
}

impl ProblemCollector {
    pub fn new() -> ProblemCollector {
        ProblemCollector::default()
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Messages only, in report order.
    pub fn messages(&self) -> Vec<&str> {
        self.problems.iter().map(|p| p.message.as_str()).collect()
    }

    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }

    pub fn to_diagnostics(&self, file: &str) -> Vec<Diagnostic> {
        self.problems.iter().map(|p| p.to_diagnostic(file)).collect()
    }
}

impl ProblemReporter for ProblemCollector {
    fn report(&mut self, problem: Problem) {
        self.problems.push(problem);
    }
}
