use anyhow::{anyhow, Result};
use text_size::TextRange;

use super::node::{FunctionData, NodeId, NodeKind};
use super::tree::SyntaxTree;

/// Computes the header range a function diagnostic should highlight.
///
/// Arrow functions anchor at the `=>` token. A function serving as an object
/// property or class method anchors from the start of the enclosing
/// property/method through the `(` of the parameter list. Everything else
/// anchors from the function's own start through the `(`.
///
/// The grammar guarantees the anchor tokens exist for any syntactically valid
/// function node, so a missing one is a broken host-tree contract and errors
/// out instead of producing a diagnostic with a bogus location.
pub fn function_head_range(tree: &SyntaxTree, id: NodeId) -> Result<TextRange> {
    let node = tree.node(id);
    let function = node
        .function()
        .ok_or_else(|| anyhow!("node {:?} is not function-like", id))?;

    if let NodeKind::ArrowFunction(f) = &node.kind {
        return f
            .arrow
            .ok_or_else(|| anyhow!("arrow function at {:?} has no arrow token range", node.range));
    }

    let open = function.params_open.ok_or_else(|| {
        anyhow!(
            "function at {:?} has no opening parenthesis offset",
            node.range
        )
    })?;
    let start = match tree.parent(id).map(|p| tree.node(p)) {
        Some(parent)
            if matches!(
                parent.kind,
                NodeKind::Property { .. } | NodeKind::MethodDefinition { .. }
            ) =>
        {
            parent.range.start()
        }
        _ => node.range.start(),
    };
    Ok(TextRange::new(start, open))
}

/// Builds a human-readable description of a function for diagnostics, such
/// as `async method 'save'` or `async arrow function`.
#[must_use]
pub fn function_description(tree: &SyntaxTree, id: NodeId) -> String {
    let node = tree.node(id);
    let Some(function) = node.function() else {
        return "function".to_owned();
    };

    let parent_kind = tree.parent(id).map(|p| &tree.node(p).kind);
    let is_method = matches!(
        parent_kind,
        Some(NodeKind::Property { .. } | NodeKind::MethodDefinition { .. })
    );

    let mut description = String::new();
    if function.is_async {
        description.push_str("async ");
    }
    if function.is_generator {
        description.push_str("generator ");
    }
    description.push_str(match &node.kind {
        NodeKind::ArrowFunction(_) => "arrow function",
        _ if is_method => "method",
        _ => "function",
    });

    if let Some(name) = resolved_name(tree, function, parent_kind) {
        description.push_str(" '");
        description.push_str(&name);
        description.push('\'');
    }
    description
}

/// Uppercases the first character of `text`, for sentence-initial use.
#[must_use]
pub fn upper_case_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn resolved_name(
    tree: &SyntaxTree,
    function: &FunctionData,
    parent_kind: Option<&NodeKind>,
) -> Option<String> {
    if let Some(name) = &function.name {
        return Some(name.to_string());
    }
    // Anonymous function in a property or method slot: borrow the key's name.
    let key = match parent_kind {
        Some(NodeKind::Property { key, .. } | NodeKind::MethodDefinition { key, .. }) => *key,
        _ => return None,
    };
    match &tree.node(key).kind {
        NodeKind::Identifier { name } => Some(name.to_string()),
        NodeKind::Literal { raw } => Some(raw.to_string()),
        _ => None,
    }
}
