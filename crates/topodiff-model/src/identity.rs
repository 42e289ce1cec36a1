use crate::diff_state::{DiffState, EntityRef};

/// An entity that can be matched across two snapshots by its identity key.
///
/// Two entities with the same key are the same entity, whatever their other
/// fields hold. Full structural comparison stays on `PartialEq`.
pub trait Identified {
    /// The identity key, borrowed from the entity.
    type Key<'a>: PartialEq
    where
        Self: 'a;

    fn identity(&self) -> Self::Key<'_>;

    /// Path-like reference to this entity.
    fn entity_ref(&self) -> EntityRef;

    /// Diff verdict, present only on diff-result entities.
    fn diff_state(&self) -> Option<&DiffState>;

    fn same_identity(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}
