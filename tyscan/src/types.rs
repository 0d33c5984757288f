//! Narrow interface to the external type checker.
//!
//! The engine never infers types itself. It asks an injected [`TypeOracle`]
//! three questions: what is the type of a node, is a type thenable, and does
//! a type expose a well-known capability. Union/intersection composition is
//! exposed so the awaitability predicate can expand it; everything else about
//! the type system stays on the oracle's side of the boundary.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::ast::NodeId;

/// Opaque handle to a type owned by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(u32);

/// Well-known protocol capabilities the rules query for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownCapability {
    /// The async-iteration protocol (`[Symbol.asyncIterator]`).
    AsyncIterator,
    /// The synchronous iteration protocol (`[Symbol.iterator]`).
    Iterator,
}

impl WellKnownCapability {
    /// Canonical property name of the capability.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WellKnownCapability::AsyncIterator => "asyncIterator",
            WellKnownCapability::Iterator => "iterator",
        }
    }
}

/// Type queries answered by the host's type checker.
///
/// All queries are synchronous and side-effect free. An oracle that cannot
/// resolve a node returns `None` from [`TypeOracle::type_of`]; the rules
/// treat unresolved types as not awaitable rather than failing.
pub trait TypeOracle {
    /// Static type of an expression node, if the oracle can resolve one.
    fn type_of(&self, node: NodeId) -> Option<TypeId>;

    /// Whether values of `ty` expose a callable `then` member compatible
    /// with promise consumption.
    fn is_thenable(&self, ty: TypeId) -> bool;

    /// Whether `ty` exposes the given well-known capability.
    fn has_well_known_capability(&self, ty: TypeId, capability: WellKnownCapability) -> bool;

    /// Member types of a union or intersection, `None` for leaf types.
    /// Decomposition is required to be acyclic.
    fn constituents(&self, ty: TypeId) -> Option<&[TypeId]>;
}

/// Oracle that resolves nothing. Used when no type information is available;
/// the type-directed checks then degrade to their safe negatives.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOracle;

impl TypeOracle for NullOracle {
    fn type_of(&self, _node: NodeId) -> Option<TypeId> {
        None
    }

    fn is_thenable(&self, _ty: TypeId) -> bool {
        false
    }

    fn has_well_known_capability(&self, _ty: TypeId, _capability: WellKnownCapability) -> bool {
        false
    }

    fn constituents(&self, _ty: TypeId) -> Option<&[TypeId]> {
        None
    }
}

/// Programmable oracle returning scripted answers.
///
/// Stands in for real type inference in tests and embedding hosts that
/// precompute their type facts. Composite types can only be assembled from
/// ids that already exist, so decomposition is acyclic by construction.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    next_id: u32,
    node_types: FxHashMap<NodeId, TypeId>,
    thenable: FxHashSet<TypeId>,
    capabilities: FxHashSet<(TypeId, WellKnownCapability)>,
    composites: FxHashMap<TypeId, Vec<TypeId>>,
}

impl ScriptedOracle {
    /// Creates an oracle with no scripted facts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh(&mut self) -> TypeId {
        let id = TypeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Allocates a leaf type with no capabilities.
    pub fn opaque_type(&mut self) -> TypeId {
        self.fresh()
    }

    /// Allocates a leaf type that answers the thenable test positively.
    pub fn thenable_type(&mut self) -> TypeId {
        let id = self.fresh();
        self.thenable.insert(id);
        id
    }

    /// Allocates a leaf type exposing `capability`.
    pub fn type_with_capability(&mut self, capability: WellKnownCapability) -> TypeId {
        let id = self.fresh();
        self.capabilities.insert((id, capability));
        id
    }

    /// Allocates a union type over `members`.
    pub fn union_type(&mut self, members: &[TypeId]) -> TypeId {
        let id = self.fresh();
        self.composites.insert(id, members.to_vec());
        id
    }

    /// Allocates an intersection type over `members`. Decomposed the same
    /// way as a union.
    pub fn intersection_type(&mut self, members: &[TypeId]) -> TypeId {
        self.union_type(members)
    }

    /// Marks an existing type as thenable.
    pub fn mark_thenable(&mut self, ty: TypeId) {
        self.thenable.insert(ty);
    }

    /// Grants `capability` to an existing type.
    pub fn grant_capability(&mut self, ty: TypeId, capability: WellKnownCapability) {
        self.capabilities.insert((ty, capability));
    }

    /// Scripts the static type of `node`.
    pub fn bind(&mut self, node: NodeId, ty: TypeId) {
        self.node_types.insert(node, ty);
    }
}

impl TypeOracle for ScriptedOracle {
    fn type_of(&self, node: NodeId) -> Option<TypeId> {
        self.node_types.get(&node).copied()
    }

    fn is_thenable(&self, ty: TypeId) -> bool {
        self.thenable.contains(&ty)
    }

    fn has_well_known_capability(&self, ty: TypeId, capability: WellKnownCapability) -> bool {
        self.capabilities.contains(&(ty, capability))
    }

    fn constituents(&self, ty: TypeId) -> Option<&[TypeId]> {
        self.composites.get(&ty).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_oracle_answers_match_script() {
        let mut oracle = ScriptedOracle::new();
        let plain = oracle.opaque_type();
        let promise = oracle.thenable_type();
        let stream = oracle.type_with_capability(WellKnownCapability::AsyncIterator);

        assert!(!oracle.is_thenable(plain));
        assert!(oracle.is_thenable(promise));
        assert!(oracle.has_well_known_capability(stream, WellKnownCapability::AsyncIterator));
        assert!(!oracle.has_well_known_capability(stream, WellKnownCapability::Iterator));
        assert!(oracle.constituents(plain).is_none());

        let union = oracle.union_type(&[plain, promise]);
        assert_eq!(oracle.constituents(union), Some([plain, promise].as_slice()));
    }
}
