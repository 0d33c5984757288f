use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::ast::{NodeId, NodeKind};
use crate::config::ThisAliasOptions;

use super::registry::{RuleDescriptor, NO_THIS_ALIAS};
use super::{create_finding, Context, Finding, Rule};

const MSG_THIS_ASSIGNMENT: &str = "Unexpected aliasing of 'this' to local variable.";
const MSG_THIS_DESTRUCTURE: &str =
    "Unexpected aliasing of members of 'this' to local variables.";

/// Rule flagging bindings that alias the implicit receiver, such as
/// `const self = this`.
///
/// Stateless: every declarator/assignment is judged on its own shape, at any
/// nesting depth. The scope tracking of the async rules plays no part here.
pub struct NoThisAlias {
    allow_destructuring: bool,
    allowed_names: FxHashSet<String>,
}

impl NoThisAlias {
    /// Creates the rule from its configuration options.
    #[must_use]
    pub fn new(options: &ThisAliasOptions) -> Self {
        Self {
            allow_destructuring: options.allow_destructuring,
            allowed_names: options.allowed_names.iter().cloned().collect(),
        }
    }

    fn check_binding(&self, target: NodeId, context: &Context) -> Option<Vec<Finding>> {
        let target_node = context.tree.node(target);
        match &target_node.kind {
            NodeKind::Identifier { name } => {
                if self.allowed_names.contains(name.as_str()) {
                    return None;
                }
                Some(vec![create_finding(
                    MSG_THIS_ASSIGNMENT,
                    NO_THIS_ALIAS,
                    context,
                    target_node.range,
                )])
            }
            // Any non-identifier target is a destructuring pattern.
            _ => {
                if self.allow_destructuring {
                    return None;
                }
                Some(vec![create_finding(
                    MSG_THIS_DESTRUCTURE,
                    NO_THIS_ALIAS,
                    context,
                    target_node.range,
                )])
            }
        }
    }
}

impl Rule for NoThisAlias {
    fn name(&self) -> &'static str {
        "NoThisAlias"
    }

    fn descriptor(&self) -> RuleDescriptor {
        NO_THIS_ALIAS
    }

    fn enter_node(&mut self, node: NodeId, context: &Context) -> Result<Option<Vec<Finding>>> {
        let (target, source) = match &context.tree.node(node).kind {
            NodeKind::VariableDeclarator {
                id,
                init: Some(init),
            } => (*id, *init),
            NodeKind::AssignmentExpression { left, right } => (*left, *right),
            _ => return Ok(None),
        };
        if !matches!(context.tree.node(source).kind, NodeKind::ThisExpression) {
            return Ok(None);
        }
        Ok(self.check_binding(target, context))
    }
}
