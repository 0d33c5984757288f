use smallvec::SmallVec;
use text_size::TextRange;

use super::node::{FunctionData, Node, NodeId, NodeKind};

/// Child ids of a node, in source order. Most nodes have few children.
pub(crate) type ChildList = SmallVec<[NodeId; 8]>;

/// An immutable, arena-backed syntax tree for one analysis unit.
///
/// Built once through [`TreeBuilder`]; parent links are assigned when the
/// builder finishes and never change afterwards.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SyntaxTree {
    /// Root node id of the unit.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrows the node stored under `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Id of `id`'s enclosing node, `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the children of `id` in source order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> SmallVec<[NodeId; 8]> {
        let mut out = ChildList::new();
        collect_children(&self.node(id).kind, &mut out);
        out
    }
}

fn push_function_children(f: &FunctionData, out: &mut ChildList) {
    out.extend(f.params.iter().copied());
    out.push(f.body);
}

fn collect_children(kind: &NodeKind, out: &mut ChildList) {
    match kind {
        NodeKind::Program { body }
        | NodeKind::BlockStatement { body }
        | NodeKind::ClassDeclaration { body, .. } => out.extend(body.iter().copied()),
        NodeKind::FunctionDeclaration(f)
        | NodeKind::FunctionExpression(f)
        | NodeKind::ArrowFunction(f) => push_function_children(f, out),
        NodeKind::ExpressionStatement { expression } => out.push(*expression),
        NodeKind::VariableDeclaration { declarators, .. } => {
            out.extend(declarators.iter().copied());
        }
        NodeKind::VariableDeclarator { id, init } => {
            out.push(*id);
            out.extend(init.iter().copied());
        }
        NodeKind::AssignmentExpression { left, right } => {
            out.push(*left);
            out.push(*right);
        }
        NodeKind::AwaitExpression { argument } => out.push(*argument),
        NodeKind::YieldExpression { argument, .. } | NodeKind::ReturnStatement { argument } => {
            out.extend(argument.iter().copied());
        }
        NodeKind::ForOfStatement {
            left, right, body, ..
        } => {
            out.push(*left);
            out.push(*right);
            out.push(*body);
        }
        NodeKind::ArrayExpression { elements } | NodeKind::ArrayPattern { elements } => {
            out.extend(elements.iter().copied());
        }
        NodeKind::ObjectExpression { properties } | NodeKind::ObjectPattern { properties } => {
            out.extend(properties.iter().copied());
        }
        NodeKind::Property { key, value } | NodeKind::MethodDefinition { key, value } => {
            out.push(*key);
            out.push(*value);
        }
        NodeKind::CallExpression { callee, arguments } => {
            out.push(*callee);
            out.extend(arguments.iter().copied());
        }
        NodeKind::ThisExpression | NodeKind::Identifier { .. } | NodeKind::Literal { .. } => {}
    }
}

/// Incremental constructor for a [`SyntaxTree`].
///
/// Hosts (and tests) allocate nodes bottom-up, then call [`TreeBuilder::finish`]
/// with the root id. Parent back-links are derived from the child lists in a
/// single pass, so callers never manage them by hand.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a node and returns its id.
    pub fn node(&mut self, kind: NodeKind, range: TextRange) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            kind,
            range,
            parent: None,
        });
        id
    }

    /// Seals the arena, wiring parent links reachable from `root`.
    #[must_use]
    pub fn finish(mut self, root: NodeId) -> SyntaxTree {
        let mut pending: Vec<NodeId> = vec![root];
        let mut scratch = ChildList::new();
        while let Some(id) = pending.pop() {
            scratch.clear();
            collect_children(&self.nodes[id.index()].kind, &mut scratch);
            for child in &scratch {
                self.nodes[child.index()].parent = Some(id);
                pending.push(*child);
            }
        }
        SyntaxTree {
            nodes: self.nodes,
            root,
        }
    }
}
