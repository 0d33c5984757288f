//! Type-directed predicates deciding whether an expression suspends.

use smallvec::SmallVec;

use crate::ast::NodeId;
use crate::types::{TypeId, TypeOracle, WellKnownCapability};

/// Flattened view of a possibly-composite type. Unions rarely have more than
/// a handful of members.
type LeafTypes = SmallVec<[TypeId; 4]>;

/// Recursively flattens union/intersection composition into leaf types.
///
/// Termination relies on the oracle's decomposition being acyclic; type
/// identity lives on the oracle's side of the boundary.
pub fn expand_types(oracle: &dyn TypeOracle, ty: TypeId, out: &mut Vec<TypeId>) {
    match oracle.constituents(ty) {
        Some(members) => {
            for member in members {
                expand_types(oracle, *member, out);
            }
        }
        None => out.push(ty),
    }
}

fn leaves(oracle: &dyn TypeOracle, ty: TypeId) -> LeafTypes {
    let mut flat = Vec::new();
    expand_types(oracle, ty, &mut flat);
    LeafTypes::from_vec(flat)
}

/// Whether `node`'s static type is awaitable: any leaf of its
/// union/intersection expansion passes the oracle's thenable test.
///
/// An unresolvable type counts as not awaitable; under-reporting is
/// preferred over a wrong diagnostic.
#[must_use]
pub fn is_awaitable(oracle: &dyn TypeOracle, node: NodeId) -> bool {
    match oracle.type_of(node) {
        Some(ty) => leaves(oracle, ty).iter().any(|leaf| oracle.is_thenable(*leaf)),
        None => false,
    }
}

/// Whether `ty` exposes the async-iteration capability on any leaf of its
/// expansion. Only delegate-yield analysis asks this.
#[must_use]
pub fn has_async_iteration(oracle: &dyn TypeOracle, ty: TypeId) -> bool {
    leaves(oracle, ty)
        .iter()
        .any(|leaf| oracle.has_well_known_capability(*leaf, WellKnownCapability::AsyncIterator))
}
