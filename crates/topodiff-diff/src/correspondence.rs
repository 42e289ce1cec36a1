//! List correspondence: pair up two child collections by identity key.
//!
//! Every entry of the result is exactly one of kept (paired), deleted
//! (unpaired left) or added (unpaired right). Left-derived entries come first
//! in left order, then added entries in right order.
//!
//! Duplicate keys inside one collection are not detected: the first equal-key
//! entry wins, and a right-hand duplicate of a matched key is dropped.

use topodiff_model::{Classification, Identified};

use crate::diffable::Diffable;

/// One entry of the tri-state partition of two collections.
#[derive(Debug)]
pub enum Correspondence<'a, T> {
    /// Same key on both sides.
    Kept { lhs: &'a T, rhs: &'a T },
    /// Only in the left collection.
    Deleted(&'a T),
    /// Only in the right collection.
    Added(&'a T),
}

impl<T> Correspondence<'_, T> {
    pub fn classification(&self) -> Classification {
        match self {
            Self::Kept { .. } => Classification::Kept,
            Self::Deleted(_) => Classification::Deleted,
            Self::Added(_) => Classification::Added,
        }
    }
}

/// Partition `lhs` and `rhs` by identity key.
pub fn correspond<'a, T: Identified>(lhs: &'a [T], rhs: &'a [T]) -> Vec<Correspondence<'a, T>> {
    let mut results: Vec<Correspondence<'a, T>> = lhs
        .iter()
        .map(|l| match rhs.iter().find(|r| l.same_identity(r)) {
            Some(r) => Correspondence::Kept { lhs: l, rhs: r },
            None => Correspondence::Deleted(l),
        })
        .collect();

    results.extend(
        rhs.iter()
            .filter(|r| !lhs.iter().any(|l| r.same_identity(l)))
            .map(Correspondence::Added),
    );
    results
}

/// Forward check of one child collection.
///
/// Kept pairs are diffed recursively; deleted and added entries are
/// stamped with their classification through their whole subtree.
pub fn diff_list<T: Diffable>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    correspond(lhs, rhs)
        .into_iter()
        .map(|entry| match entry {
            Correspondence::Kept { lhs, rhs } => lhs.diff(rhs),
            Correspondence::Deleted(l) => l.fill_diff_state(Classification::Deleted),
            Correspondence::Added(r) => r.fill_diff_state(Classification::Added),
        })
        .collect()
}

/// Stamp `forward` onto every entry of a collection.
pub fn fill_list<T: Diffable>(items: &[T], forward: Classification) -> Vec<T> {
    items
        .iter()
        .map(|item| item.fill_diff_state(forward))
        .collect()
}
