//! Arena-backed syntax tree consumed by the analysis rules.
//!
//! The tree is produced by an external parser; this module only defines the
//! shape the engine consumes. Nodes live in a flat arena and refer to each
//! other by [`NodeId`]. Parent links are non-owning back-references assigned
//! once when the tree is finalized.

mod describe;
mod node;
mod tree;

pub use describe::{function_description, function_head_range, upper_case_first};
pub use node::{DeclarationKind, FunctionData, Node, NodeId, NodeKind};
pub use tree::{SyntaxTree, TreeBuilder};
