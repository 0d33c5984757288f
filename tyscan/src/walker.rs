//! Document-order traversal dispatching node events to rules.

use anyhow::{bail, Result};

use crate::ast::{NodeId, SyntaxTree};
use crate::rules::{Context, Finding, Rule};

/// Hard bound on tree depth to keep pathological inputs from overflowing the
/// native stack.
const MAX_TRAVERSAL_DEPTH: usize = 512;

/// Walks `tree` once, depth-first in document order, feeding every node to
/// each rule's `enter_node` and, after its subtree, `leave_node`.
///
/// Findings accumulate in event order, which is the order diagnostics are
/// promised to be emitted in. The first rule error aborts the walk; nothing
/// collected for the unit is returned in that case.
pub fn walk(
    tree: &SyntaxTree,
    rules: &mut [Box<dyn Rule>],
    context: &Context,
) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    visit(tree, tree.root(), rules, context, &mut findings, 0)?;
    Ok(findings)
}

fn visit(
    tree: &SyntaxTree,
    node: NodeId,
    rules: &mut [Box<dyn Rule>],
    context: &Context,
    findings: &mut Vec<Finding>,
    depth: usize,
) -> Result<()> {
    if depth > MAX_TRAVERSAL_DEPTH {
        bail!(
            "tree depth exceeds {MAX_TRAVERSAL_DEPTH} in {}",
            context.filename.display()
        );
    }
    for rule in rules.iter_mut() {
        if let Some(mut batch) = rule.enter_node(node, context)? {
            findings.append(&mut batch);
        }
    }
    for child in tree.children(node) {
        visit(tree, child, rules, context, findings, depth + 1)?;
    }
    for rule in rules.iter_mut() {
        if let Some(mut batch) = rule.leave_node(node, context)? {
            findings.append(&mut batch);
        }
    }
    Ok(())
}
