//! Per-classification counts over a diff-result tree.

use std::fmt;

use topodiff_model::{Classification, DiffState, Networks};

/// Kind of entity reached while walking a diff-result tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Network,
    Node,
    TerminationPoint,
    Link,
    Endpoint,
    Support,
    Attribute,
}

/// Visit the diff state of every entity of `networks`, depth first.
///
/// Attribute blocks and link endpoints are visited as well; entities
/// without a state (plain input trees) are reported with `None`.
pub fn visit_states<F>(networks: &Networks, mut visit: F)
where
    F: FnMut(EntityKind, Option<&DiffState>),
{
    for network in &networks.networks {
        visit(EntityKind::Network, network.diff_state.as_ref());
        visit(EntityKind::Attribute, network.attribute.diff_state.as_ref());
        for support in &network.supports {
            visit(EntityKind::Support, support.diff_state.as_ref());
        }
        for node in &network.nodes {
            visit(EntityKind::Node, node.diff_state.as_ref());
            visit(EntityKind::Attribute, node.attribute.diff_state.as_ref());
            for support in &node.supports {
                visit(EntityKind::Support, support.diff_state.as_ref());
            }
            for tp in &node.termination_points {
                visit(EntityKind::TerminationPoint, tp.diff_state.as_ref());
                visit(EntityKind::Attribute, tp.attribute.diff_state.as_ref());
                for support in &tp.supports {
                    visit(EntityKind::Support, support.diff_state.as_ref());
                }
            }
        }
        for link in &network.links {
            visit(EntityKind::Link, link.diff_state.as_ref());
            visit(EntityKind::Endpoint, link.source.diff_state.as_ref());
            visit(EntityKind::Endpoint, link.destination.diff_state.as_ref());
            visit(EntityKind::Attribute, link.attribute.diff_state.as_ref());
            for support in &link.supports {
                visit(EntityKind::Support, support.diff_state.as_ref());
            }
        }
    }
}

/// Number of entities per classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub kept: usize,
    pub added: usize,
    pub deleted: usize,
    pub changed: usize,
}

impl Counts {
    pub fn record(&mut self, forward: Classification) {
        match forward {
            Classification::Kept => self.kept += 1,
            Classification::Added => self.added += 1,
            Classification::Deleted => self.deleted += 1,
            Classification::Changed => self.changed += 1,
        }
    }

    pub fn get(&self, forward: Classification) -> usize {
        match forward {
            Classification::Kept => self.kept,
            Classification::Added => self.added,
            Classification::Deleted => self.deleted,
            Classification::Changed => self.changed,
        }
    }

    pub fn total(&self) -> usize {
        self.kept + self.added + self.deleted + self.changed
    }

    /// `true` when nothing was added, deleted or changed.
    pub fn is_unchanged(&self) -> bool {
        self.total() == self.kept
    }
}

impl std::ops::Add for Counts {
    type Output = Counts;

    fn add(self, rhs: Counts) -> Counts {
        Counts {
            kept: self.kept + rhs.kept,
            added: self.added + rhs.added,
            deleted: self.deleted + rhs.deleted,
            changed: self.changed + rhs.changed,
        }
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} kept, {} added, {} deleted, {} changed",
            self.kept, self.added, self.deleted, self.changed
        )
    }
}

/// Counts of a diff result, broken down by entity kind.
///
/// Attribute blocks and link endpoints are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub networks: Counts,
    pub nodes: Counts,
    pub termination_points: Counts,
    pub links: Counts,
    pub supports: Counts,
}

impl DiffSummary {
    pub fn of(networks: &Networks) -> Self {
        let mut summary = Self::default();
        visit_states(networks, |kind, state| {
            let Some(state) = state else { return };
            let counts = match kind {
                EntityKind::Network => &mut summary.networks,
                EntityKind::Node => &mut summary.nodes,
                EntityKind::TerminationPoint => &mut summary.termination_points,
                EntityKind::Link => &mut summary.links,
                EntityKind::Support => &mut summary.supports,
                EntityKind::Endpoint | EntityKind::Attribute => return,
            };
            counts.record(state.forward());
        });
        summary
    }

    pub fn total(&self) -> Counts {
        self.networks + self.nodes + self.termination_points + self.links + self.supports
    }

    pub fn is_unchanged(&self) -> bool {
        self.total().is_unchanged()
    }

    /// Labelled rows, in display order.
    pub fn rows(&self) -> [(&'static str, Counts); 5] {
        [
            ("networks", self.networks),
            ("nodes", self.nodes),
            ("termination points", self.termination_points),
            ("links", self.links),
            ("supports", self.supports),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff_networks;
    use topodiff_model::{Network, Node, SupportingNetwork};

    fn snapshot(nodes: &[&str], supports: &[&str]) -> Networks {
        let mut nw = Network::new("nw");
        nw.nodes = nodes.iter().map(|n| Node::new(*n, "nw")).collect();
        nw.supports = supports.iter().map(|s| SupportingNetwork::new(*s)).collect();
        Networks::new(vec![nw])
    }

    #[test]
    fn counts_by_kind() {
        let a = snapshot(&["n1", "n2"], &["low"]);
        let b = snapshot(&["n2", "n3"], &["low"]);
        let summary = DiffSummary::of(&diff_networks(&a, &b));

        assert_eq!(summary.networks.changed, 1);
        assert_eq!(
            summary.nodes,
            Counts {
                kept: 1,
                added: 1,
                deleted: 1,
                changed: 0
            }
        );
        assert_eq!(summary.supports.kept, 1);
        assert_eq!(summary.total().total(), 5);
        assert!(!summary.is_unchanged());
    }

    #[test]
    fn identical_snapshots_are_unchanged() {
        let a = snapshot(&["n1"], &["low"]);
        let summary = DiffSummary::of(&diff_networks(&a, &a));
        assert!(summary.is_unchanged());
        assert_eq!(summary.total().kept, 3);
    }

    #[test]
    fn plain_input_has_nothing_to_count() {
        let summary = DiffSummary::of(&snapshot(&["n1"], &[]));
        assert_eq!(summary.total().total(), 0);
    }

    #[test]
    fn counts_display() {
        let counts = Counts {
            kept: 3,
            added: 1,
            deleted: 0,
            changed: 2,
        };
        assert_eq!(counts.to_string(), "3 kept, 1 added, 0 deleted, 2 changed");
        assert_eq!(counts.get(Classification::Changed), 2);
    }
}
