use anyhow::{bail, Result};
use smallvec::SmallVec;

use crate::ast::{
    function_description, function_head_range, upper_case_first, DeclarationKind, FunctionData,
    NodeId, NodeKind, SyntaxTree,
};
use crate::awaitable::{has_async_iteration, is_awaitable};

use super::registry::{RuleDescriptor, REQUIRE_AWAIT};
use super::{create_finding, Context, Finding, Rule};

/// Per-function analysis frame.
///
/// `has_async`/`is_generator` are fixed at creation from the function's
/// declared flags; `has_await`/`is_async_yield` accumulate while the frame
/// is the innermost one. A frame never observes constructs belonging to a
/// nested function, since the nested function pushes its own frame first.
#[derive(Debug, Clone, Copy)]
struct ScopeFrame {
    has_await: bool,
    has_async: bool,
    is_generator: bool,
    is_async_yield: bool,
}

/// Rule flagging `async` functions that never suspend.
///
/// Suspension points counted for the innermost enclosing function: an await
/// expression, an `await using` declaration, a `for await` loop, a delegating
/// yield over an async iterable (generators only), and implicit forwarding
/// through an expression-bodied arrow or a `return` whose value is already
/// awaitable.
pub struct RequireAwait {
    stack: SmallVec<[ScopeFrame; 4]>,
}

impl RequireAwait {
    /// Creates the rule with an empty scope stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: SmallVec::new(),
        }
    }

    fn enter_function(&mut self, function: &FunctionData) {
        self.stack.push(ScopeFrame {
            has_await: false,
            has_async: function.is_async,
            is_generator: function.is_generator,
            is_async_yield: false,
        });
    }

    /// Marks the current frame as having a suspension point. No-op outside
    /// any function: top-level await is not this rule's business.
    fn mark_await(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            frame.has_await = true;
        }
    }

    /// An expression-bodied async arrow that directly produces an awaitable
    /// value forwards it, which counts as awaiting. `async () => await x`
    /// needs no type query; the await expression marks the frame itself.
    fn check_arrow_shorthand(&mut self, function: &FunctionData, context: &Context) {
        if !function.is_async {
            return;
        }
        let body = context.tree.node(function.body);
        if matches!(
            body.kind,
            NodeKind::BlockStatement { .. } | NodeKind::AwaitExpression { .. }
        ) {
            return;
        }
        if is_awaitable(context.oracle, function.body) {
            self.mark_await();
        }
    }

    fn observe_delegate_yield(&mut self, argument: Option<NodeId>, context: &Context) {
        let Some(frame) = self.stack.last_mut() else {
            return;
        };
        if !frame.is_generator {
            return;
        }
        let Some(argument) = argument else {
            return;
        };
        // A literal operand cannot expose async iteration, so skip the type
        // query. An earlier positive is never cleared.
        if matches!(context.tree.node(argument).kind, NodeKind::Literal { .. }) {
            return;
        }
        let Some(ty) = context.oracle.type_of(argument) else {
            return;
        };
        if has_async_iteration(context.oracle, ty) {
            frame.is_async_yield = true;
        }
    }

    fn observe_return(&mut self, argument: Option<NodeId>, context: &Context) {
        // Short circuit early to avoid unnecessary type checks.
        let Some(frame) = self.stack.last() else {
            return;
        };
        if frame.has_await || !frame.has_async {
            return;
        }
        if let Some(argument) = argument {
            if is_awaitable(context.oracle, argument) {
                self.mark_await();
            }
        }
    }

    fn exit_function(&mut self, node: NodeId, context: &Context) -> Result<Option<Vec<Finding>>> {
        let Some(frame) = self.stack.pop() else {
            bail!(
                "function exit without a matching enter at {:?} in {}",
                context.tree.node(node).range,
                context.filename.display()
            );
        };
        if !frame.has_async
            || frame.has_await
            || is_empty_function(context.tree, node)
            || (frame.is_generator && frame.is_async_yield)
        {
            return Ok(None);
        }
        let head = function_head_range(context.tree, node)?;
        let description = upper_case_first(&function_description(context.tree, node));
        Ok(Some(vec![create_finding(
            &format!("{description} has no 'await' expression."),
            REQUIRE_AWAIT,
            context,
            head,
        )]))
    }
}

impl Default for RequireAwait {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RequireAwait {
    fn name(&self) -> &'static str {
        "RequireAwait"
    }

    fn descriptor(&self) -> RuleDescriptor {
        REQUIRE_AWAIT
    }

    fn enter_node(&mut self, node: NodeId, context: &Context) -> Result<Option<Vec<Finding>>> {
        match &context.tree.node(node).kind {
            NodeKind::FunctionDeclaration(f) | NodeKind::FunctionExpression(f) => {
                self.enter_function(f);
            }
            NodeKind::ArrowFunction(f) => {
                self.enter_function(f);
                self.check_arrow_shorthand(f, context);
            }
            NodeKind::AwaitExpression { .. } => self.mark_await(),
            NodeKind::VariableDeclaration {
                kind: DeclarationKind::AwaitUsing,
                ..
            } => self.mark_await(),
            NodeKind::ForOfStatement { is_await: true, .. } => self.mark_await(),
            NodeKind::YieldExpression {
                argument,
                delegate: true,
            } => self.observe_delegate_yield(*argument, context),
            NodeKind::ReturnStatement { argument } => self.observe_return(*argument, context),
            _ => {}
        }
        Ok(None)
    }

    fn leave_node(&mut self, node: NodeId, context: &Context) -> Result<Option<Vec<Finding>>> {
        if !context.tree.node(node).is_function() {
            return Ok(None);
        }
        self.exit_function(node, context)
    }
}

/// True for a block body with zero statements; an intentionally empty async
/// stub is exempt from reporting.
fn is_empty_function(tree: &SyntaxTree, id: NodeId) -> bool {
    let Some(function) = tree.node(id).function() else {
        return false;
    };
    matches!(
        &tree.node(function.body).kind,
        NodeKind::BlockStatement { body } if body.is_empty()
    )
}
