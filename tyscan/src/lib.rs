//! TyScan: type-aware static analysis rules for TypeScript-style syntax trees.
//!
//! The engine consumes a host-supplied syntax tree ([`ast::SyntaxTree`]) and
//! an injected type-query capability ([`types::TypeOracle`]), runs its rules
//! over one depth-first document-order traversal, and produces structured
//! [`rules::Finding`]s. It never parses source text, never infers types, and
//! performs no I/O during analysis.
//!
//! Two rules ship built in:
//! - `NoThisAlias` (`TYS-R001`): flags bindings that alias the implicit
//!   receiver, such as `const self = this`.
//! - `RequireAwait` (`TYS-A001`): flags `async` functions that never
//!   suspend.
//!
//! ```
//! use tyscan::analyzer::Analyzer;
//! use tyscan::ast::{NodeKind, TreeBuilder};
//! use tyscan::types::NullOracle;
//! use compact_str::CompactString;
//! use text_size::TextRange;
//! use std::path::Path;
//!
//! // const self = this;
//! let source = "const self = this;";
//! let mut b = TreeBuilder::new();
//! let name = b.node(
//!     NodeKind::Identifier { name: CompactString::from("self") },
//!     TextRange::new(6.into(), 10.into()),
//! );
//! let this = b.node(NodeKind::ThisExpression, TextRange::new(13.into(), 17.into()));
//! let declarator = b.node(
//!     NodeKind::VariableDeclarator { id: name, init: Some(this) },
//!     TextRange::new(6.into(), 17.into()),
//! );
//! let statement = b.node(
//!     NodeKind::VariableDeclaration {
//!         kind: tyscan::ast::DeclarationKind::Const,
//!         declarators: vec![declarator],
//!     },
//!     TextRange::new(0.into(), 18.into()),
//! );
//! let program = b.node(NodeKind::Program { body: vec![statement] }, TextRange::new(0.into(), 18.into()));
//! let tree = b.finish(program);
//!
//! let findings = Analyzer::new()
//!     .analyze(&tree, source, Path::new("mod.ts"), &NullOracle)
//!     .unwrap();
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].rule_id, "TYS-R001");
//! ```

/// Per-unit orchestration of rules and traversal.
pub mod analyzer;
/// Arena-backed syntax tree model.
pub mod ast;
/// Type-directed awaitability predicates.
pub mod awaitable;
/// Configuration models and loader.
pub mod config;
/// The rule trait, findings, and the built-in rules.
pub mod rules;
/// The type-oracle boundary.
pub mod types;
/// Offset-to-line/column mapping.
pub mod utils;
/// Document-order traversal dispatch.
pub mod walker;

pub use analyzer::{findings_to_json, Analyzer};
pub use config::Config;
pub use rules::{Context, Finding, Rule};
