//! `Diffable` implementations for every topology entity kind.
//!
//! Composite kinds (network, node, link, termination point) run the forward
//! check on each child collection, compare their attribute block and then
//! derive their own verdict from the backward check. Reference kinds are
//! leaves: a matched reference is always `kept`.

use tracing::debug;

use topodiff_model::{
    Classification, DiffState, Identified, Link, Network, Networks, Node, SupportingLink,
    SupportingNetwork, SupportingNode, SupportingTerminationPoint, TerminationPoint, TpRef,
};

use crate::correspondence::{diff_list, fill_list};
use crate::diffable::{diff_attribute, fill_attribute, BackwardCheck, Diffable};

/// Diff two snapshots, matching their networks by `network-id`.
pub fn diff_networks(lhs: &Networks, rhs: &Networks) -> Networks {
    let result = Networks::new(diff_list(&lhs.networks, &rhs.networks));
    debug!(
        lhs = lhs.networks.len(),
        rhs = rhs.networks.len(),
        result = result.networks.len(),
        "topology diff complete"
    );
    result
}

impl Diffable for Network {
    fn diff(&self, other: &Self) -> Self {
        let owner = self.entity_ref();
        let nodes = diff_list(&self.nodes, &other.nodes);
        let links = diff_list(&self.links, &other.links);
        let supports = diff_list(&self.supports, &other.supports);
        let attribute = diff_attribute(&owner, &self.attribute, &other.attribute);
        let state = BackwardCheck::new()
            .list(&nodes)
            .list(&links)
            .list(&supports)
            .attribute(&attribute)
            .verdict(owner);
        debug!(network = %self.name, forward = %state.forward(), "network diffed");
        Self {
            name: self.name.clone(),
            network_types: other.network_types.clone(),
            nodes,
            links,
            supports,
            attribute,
            diff_state: Some(state),
        }
    }

    fn fill_diff_state(&self, forward: Classification) -> Self {
        debug!(network = %self.name, %forward, "network filled");
        Self {
            name: self.name.clone(),
            network_types: self.network_types.clone(),
            nodes: fill_list(&self.nodes, forward),
            links: fill_list(&self.links, forward),
            supports: fill_list(&self.supports, forward),
            attribute: fill_attribute(&self.attribute, forward),
            diff_state: Some(DiffState::terminal(forward)),
        }
    }
}

impl Diffable for Node {
    fn diff(&self, other: &Self) -> Self {
        let owner = self.entity_ref();
        let termination_points = diff_list(&self.termination_points, &other.termination_points);
        let supports = diff_list(&self.supports, &other.supports);
        let attribute = diff_attribute(&owner, &self.attribute, &other.attribute);
        let state = BackwardCheck::new()
            .list(&termination_points)
            .list(&supports)
            .attribute(&attribute)
            .verdict(owner);
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            termination_points,
            supports,
            attribute,
            diff_state: Some(state),
        }
    }

    fn fill_diff_state(&self, forward: Classification) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            termination_points: fill_list(&self.termination_points, forward),
            supports: fill_list(&self.supports, forward),
            attribute: fill_attribute(&self.attribute, forward),
            diff_state: Some(DiffState::terminal(forward)),
        }
    }
}

impl Diffable for TerminationPoint {
    fn diff(&self, other: &Self) -> Self {
        let owner = self.entity_ref();
        let supports = diff_list(&self.supports, &other.supports);
        let attribute = diff_attribute(&owner, &self.attribute, &other.attribute);
        let state = BackwardCheck::new()
            .list(&supports)
            .attribute(&attribute)
            .verdict(owner);
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            supports,
            attribute,
            diff_state: Some(state),
        }
    }

    fn fill_diff_state(&self, forward: Classification) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            supports: fill_list(&self.supports, forward),
            attribute: fill_attribute(&self.attribute, forward),
            diff_state: Some(DiffState::terminal(forward)),
        }
    }
}

impl Diffable for Link {
    fn diff(&self, other: &Self) -> Self {
        let owner = self.entity_ref();
        let source = self.source.diff(&other.source);
        let destination = self.destination.diff(&other.destination);
        let supports = diff_list(&self.supports, &other.supports);
        let attribute = diff_attribute(&owner, &self.attribute, &other.attribute);
        let state = BackwardCheck::new()
            .item(&source)
            .item(&destination)
            .list(&supports)
            .attribute(&attribute)
            .verdict(owner);
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            source,
            destination,
            supports,
            attribute,
            diff_state: Some(state),
        }
    }

    fn fill_diff_state(&self, forward: Classification) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            source: self.source.fill_diff_state(forward),
            destination: self.destination.fill_diff_state(forward),
            supports: fill_list(&self.supports, forward),
            attribute: fill_attribute(&self.attribute, forward),
            diff_state: Some(DiffState::terminal(forward)),
        }
    }
}

/// Reference kinds have no children: a matched pair is kept as-is and
/// filling only stamps the reference itself.
macro_rules! impl_reference_diffable {
    ($($kind:ty),+ $(,)?) => {$(
        impl Diffable for $kind {
            fn diff(&self, other: &Self) -> Self {
                Self {
                    diff_state: Some(DiffState::kept(self.entity_ref())),
                    ..other.clone()
                }
            }

            fn fill_diff_state(&self, forward: Classification) -> Self {
                Self {
                    diff_state: Some(DiffState::terminal(forward)),
                    ..self.clone()
                }
            }
        }
    )+};
}

impl_reference_diffable!(
    SupportingNetwork,
    SupportingNode,
    SupportingTerminationPoint,
    SupportingLink,
    TpRef,
);

#[cfg(test)]
mod tests {
    use super::*;
    use topodiff_model::{L2NodeAttribute, NodeAttribute};

    fn state_of<T: Identified>(item: &T) -> Option<Classification> {
        item.diff_state().map(DiffState::forward)
    }

    fn node(name: &str, tps: &[&str]) -> Node {
        let mut node = Node::new(name, "nw");
        node.termination_points = tps
            .iter()
            .map(|tp| TerminationPoint::new(*tp, &node.path))
            .collect();
        node
    }

    #[test]
    fn kept_node_classifies_each_termination_point() {
        let a = node("n1", &["p1", "p2"]);
        let b = node("n1", &["p2", "p3"]);
        let result = a.diff(&b);

        assert_eq!(state_of(&result), Some(Classification::Changed));
        let tps: Vec<_> = result
            .termination_points
            .iter()
            .map(|tp| (tp.name.as_str(), state_of(tp)))
            .collect();
        assert_eq!(
            tps,
            vec![
                ("p1", Some(Classification::Deleted)),
                ("p2", Some(Classification::Kept)),
                ("p3", Some(Classification::Added)),
            ]
        );
    }

    #[test]
    fn identical_nodes_stay_kept() {
        let a = node("n1", &["p1"]);
        let result = a.diff(&a);
        assert_eq!(state_of(&result), Some(Classification::Kept));
        assert_eq!(
            result.diff_state.as_ref().and_then(|s| s.pair()).map(|p| p.as_str()),
            Some("nw/n1")
        );
    }

    #[test]
    fn attribute_change_promotes_node() {
        let a = node("n1", &["p1"]);
        let mut b = a.clone();
        b.attribute = NodeAttribute::l2(L2NodeAttribute {
            name: "renamed".into(),
            ..Default::default()
        });
        let result = a.diff(&b);
        assert_eq!(state_of(&result), Some(Classification::Changed));
        assert_eq!(
            result.attribute.diff_state.as_ref().map(DiffState::forward),
            Some(Classification::Added)
        );
        assert_eq!(state_of(&result.termination_points[0]), Some(Classification::Kept));
    }

    #[test]
    fn filled_node_stamps_descendants() {
        let mut a = node("n1", &["p1"]);
        a.supports.push(SupportingNode::new("low", "x"));
        a.termination_points[0]
            .supports
            .push(SupportingTerminationPoint::new("low", "x", "eth0"));
        let filled = a.fill_diff_state(Classification::Added);

        assert_eq!(state_of(&filled), Some(Classification::Added));
        assert_eq!(state_of(&filled.supports[0]), Some(Classification::Added));
        assert_eq!(
            state_of(&filled.termination_points[0].supports[0]),
            Some(Classification::Added)
        );
        assert_eq!(
            filled.attribute.diff_state.as_ref().map(DiffState::forward),
            Some(Classification::Added)
        );
        assert!(filled.diff_state.as_ref().and_then(|s| s.pair()).is_none());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = node("n1", &["p1"]);
        let b = node("n1", &["p2"]);
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = a.diff(&b);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
        assert!(a.diff_state.is_none());
    }

    #[test]
    fn deep_change_bubbles_to_network() {
        let mut a = Network::new("nw");
        a.nodes.push(node("n1", &["p1"]));
        let mut b = a.clone();
        b.nodes[0].termination_points[0]
            .supports
            .push(SupportingTerminationPoint::new("low", "x", "eth0"));

        let result = a.diff(&b);
        assert_eq!(state_of(&result), Some(Classification::Changed));
        assert_eq!(state_of(&result.nodes[0]), Some(Classification::Changed));
        assert_eq!(
            state_of(&result.nodes[0].termination_points[0]),
            Some(Classification::Changed)
        );
        assert_eq!(
            state_of(&result.nodes[0].termination_points[0].supports[0]),
            Some(Classification::Added)
        );
    }

    #[test]
    fn networks_matched_by_id() {
        let lhs = Networks::new(vec![Network::new("a"), Network::new("b")]);
        let rhs = Networks::new(vec![Network::new("b"), Network::new("c")]);
        let result = diff_networks(&lhs, &rhs);
        let states: Vec<_> = result
            .networks
            .iter()
            .map(|nw| (nw.name.as_str(), state_of(nw)))
            .collect();
        assert_eq!(
            states,
            vec![
                ("a", Some(Classification::Deleted)),
                ("b", Some(Classification::Kept)),
                ("c", Some(Classification::Added)),
            ]
        );
    }
}
