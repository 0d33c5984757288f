//! Per-unit orchestration: configuration, rule set, traversal, findings.

use std::path::Path;

use anyhow::Result;

use crate::ast::SyntaxTree;
use crate::config::Config;
use crate::rules::{registry, Context, Finding};
use crate::types::TypeOracle;
use crate::utils::LineIndex;
use crate::walker;

/// Entry point tying a configuration to the built-in rule set.
///
/// Analysis is a pure function of `(tree, oracle, configuration)`: the
/// analyzer holds no per-unit state, so the same inputs always produce the
/// same finding sequence.
#[derive(Debug, Default, Clone)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Creates an analyzer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Analyzes one unit and returns its findings in emission order.
    ///
    /// `source` is only consulted for line/column mapping; `oracle` answers
    /// the type queries. An `Err` means the host tree broke an internal
    /// contract (unpaired function exit, missing anchor token); no findings
    /// from the unit are returned in that case.
    pub fn analyze(
        &self,
        tree: &SyntaxTree,
        source: &str,
        filename: &Path,
        oracle: &dyn TypeOracle,
    ) -> Result<Vec<Finding>> {
        let line_index = LineIndex::new(source);
        let context = Context {
            filename: filename.to_path_buf(),
            tree,
            line_index: &line_index,
            oracle,
        };
        let mut rules = registry::built_in_rules(&self.config);
        walker::walk(tree, &mut rules, &context)
    }
}

/// Serializes findings to pretty-printed JSON for downstream tooling.
pub fn findings_to_json(findings: &[Finding]) -> Result<String> {
    Ok(serde_json::to_string_pretty(findings)?)
}
