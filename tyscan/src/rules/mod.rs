use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use text_size::TextRange;

use crate::ast::{NodeId, SyntaxTree};
use crate::types::TypeOracle;
use crate::utils::LineIndex;

/// Context passed to rules during analysis.
pub struct Context<'a> {
    /// Path of the unit being analyzed, for finding attribution.
    pub filename: PathBuf,
    /// The syntax tree under analysis.
    pub tree: &'a SyntaxTree,
    /// Line index for accurate line/column mapping.
    pub line_index: &'a LineIndex,
    /// Type queries answered by the host's checker.
    pub oracle: &'a dyn TypeOracle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single issue found by a rule.
pub struct Finding {
    /// ID of the rule that triggered the finding.
    pub rule_id: String,
    /// Severity level (e.g., "MEDIUM").
    pub severity: String,
    /// Description of the issue.
    pub message: String,
    /// File where the issue was found.
    pub file: PathBuf,
    /// Line number of the anchor start.
    pub line: usize,
    /// Column number of the anchor start.
    pub col: usize,
    /// Line number of the anchor end.
    pub end_line: usize,
    /// Column number of the anchor end.
    pub end_col: usize,
}

/// Trait defining an analysis rule.
///
/// Rules observe the walker's depth-first document-order traversal through
/// `enter_node`/`leave_node` and never walk the tree themselves. An `Err`
/// signals a broken host-tree contract and aborts analysis of the unit;
/// findings from a half-analyzed unit are never emitted.
pub trait Rule {
    /// Returns the descriptive name of the rule.
    fn name(&self) -> &'static str;
    /// Returns the typed metadata of the rule.
    fn descriptor(&self) -> registry::RuleDescriptor;
    /// Called when the traversal enters a node.
    fn enter_node(&mut self, _node: NodeId, _context: &Context) -> Result<Option<Vec<Finding>>> {
        Ok(None)
    }
    /// Called when the traversal leaves a node.
    fn leave_node(&mut self, _node: NodeId, _context: &Context) -> Result<Option<Vec<Finding>>> {
        Ok(None)
    }
}

/// Builds a [`Finding`] anchored at `range`, stamped from rule metadata.
pub(crate) fn create_finding(
    message: &str,
    descriptor: registry::RuleDescriptor,
    context: &Context,
    range: TextRange,
) -> Finding {
    let (line, col) = context.line_index.line_col(range.start());
    let (end_line, end_col) = context.line_index.line_col(range.end());
    Finding {
        rule_id: descriptor.id.to_owned(),
        severity: descriptor.default_severity.as_str().to_owned(),
        message: message.to_owned(),
        file: context.filename.clone(),
        line,
        col,
        end_line,
        end_col,
    }
}

/// Module containing receiver-aliasing rules.
pub mod no_this_alias;
/// Typed metadata registry for all rule IDs.
pub mod registry;
/// Module containing async/suspension rules.
pub mod require_await;
