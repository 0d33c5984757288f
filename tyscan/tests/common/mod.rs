#![allow(dead_code)]

use std::path::Path;

use compact_str::CompactString;
use text_size::{TextRange, TextSize};
use tyscan::analyzer::Analyzer;
use tyscan::ast::{FunctionData, NodeId, SyntaxTree};
use tyscan::config::Config;
use tyscan::rules::Finding;
use tyscan::types::TypeOracle;

/// Range of the first occurrence of `needle` in `source`.
pub fn range_of(source: &str, needle: &str) -> TextRange {
    let start = source.find(needle).expect("needle present in source");
    TextRange::new(
        TextSize::from(u32::try_from(start).unwrap()),
        TextSize::from(u32::try_from(start + needle.len()).unwrap()),
    )
}

/// Start offset of the first occurrence of `needle` in `source`.
pub fn offset_of(source: &str, needle: &str) -> TextSize {
    range_of(source, needle).start()
}

/// Start offset of the `n`-th (0-based) occurrence of `needle` in `source`.
pub fn offset_of_nth(source: &str, needle: &str, n: usize) -> TextSize {
    let mut from = 0;
    for _ in 0..n {
        let hit = source[from..].find(needle).expect("occurrence present");
        from += hit + needle.len();
    }
    let hit = source[from..].find(needle).expect("occurrence present");
    TextSize::from(u32::try_from(from + hit).unwrap())
}

/// Function payload for a non-arrow function.
pub fn fn_data(
    name: Option<&str>,
    is_async: bool,
    is_generator: bool,
    body: NodeId,
    params_open: TextSize,
) -> FunctionData {
    FunctionData {
        name: name.map(CompactString::from),
        is_async,
        is_generator,
        params: Vec::new(),
        body,
        params_open: Some(params_open),
        arrow: None,
    }
}

/// Function payload for an arrow function.
pub fn arrow_data(is_async: bool, body: NodeId, arrow: TextRange) -> FunctionData {
    FunctionData {
        name: None,
        is_async,
        is_generator: false,
        params: Vec::new(),
        body,
        params_open: None,
        arrow: Some(arrow),
    }
}

/// Runs the default-configured analyzer over one unit.
pub fn analyze(tree: &SyntaxTree, source: &str, oracle: &dyn TypeOracle) -> Vec<Finding> {
    Analyzer::new()
        .analyze(tree, source, Path::new("mod.ts"), oracle)
        .expect("analysis succeeds")
}

/// Runs a custom-configured analyzer over one unit.
pub fn analyze_with(
    config: Config,
    tree: &SyntaxTree,
    source: &str,
    oracle: &dyn TypeOracle,
) -> Vec<Finding> {
    Analyzer::new()
        .with_config(config)
        .analyze(tree, source, Path::new("mod.ts"), oracle)
        .expect("analysis succeeds")
}
