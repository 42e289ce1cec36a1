//! Diff engine for topodiff.
//!
//! Two snapshots of a multi-layer topology are compared level by level.
//! Entities of each collection are matched by identity key (forward check):
//! matched pairs are diffed recursively, unmatched left entries become
//! `deleted` and unmatched right entries become `added`, with the state
//! stamped on their whole subtree. A matched entity is then `changed` if
//! any direct child is not `kept` (backward check). Inputs are never
//! modified; the result is a fresh tree.
//!
//! # Key Types
//!
//! - [`diff_networks`] -- entry point, diffs two [`Networks`](topodiff_model::Networks) documents
//! - [`Diffable`] / [`BackwardCheck`] -- per-kind diff and verdict derivation
//! - [`Correspondence`] -- kept/deleted/added partition of two entity lists
//! - [`DiffSummary`] / [`Counts`] -- per-kind classification counts of a result

mod correspondence;
mod diffable;
mod summary;
mod topology;

#[cfg(test)]
mod tests;

pub use correspondence::{correspond, diff_list, fill_list, Correspondence};
pub use diffable::{diff_attribute, diff_single_value, fill_attribute, BackwardCheck, Diffable};
pub use summary::{visit_states, Counts, DiffSummary, EntityKind};
pub use topology::diff_networks;
