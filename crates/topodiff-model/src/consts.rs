//! IETF namespaces and document keys used by topology documents.

pub const NS_NW: &str = "ietf-network";
pub const NS_TOPO: &str = "ietf-network-topology";
pub const NS_L2NW: &str = "ietf-l2-topology";
pub const NS_L3NW: &str = "ietf-l3-unicast-topology";

/// `network-types` marker for layer 2 networks.
pub const NWTYPE_L2: &str = "ietf-l2-topology:l2-network";
/// `network-types` marker for layer 3 unicast networks.
pub const NWTYPE_L3: &str = "ietf-l3-unicast-topology:l3-unicast-topology";

/// Reserved key carrying the diff state of an entity in a diff-result document.
pub const DIFF_STATE_KEY: &str = "_diff_state_";

pub const NETWORKS_KEY: &str = "ietf-network:networks";
pub const NETWORK_KEY: &str = "network";
pub const NODE_KEY: &str = "node";
pub const LINK_KEY: &str = "ietf-network-topology:link";
pub const TP_KEY: &str = "ietf-network-topology:termination-point";

pub const SUPPORTING_NETWORK_KEY: &str = "supporting-network";
pub const SUPPORTING_NODE_KEY: &str = "supporting-node";
pub const SUPPORTING_LINK_KEY: &str = "supporting-link";
pub const SUPPORTING_TP_KEY: &str = "supporting-termination-point";

pub const L2_NETWORK_ATTRIBUTES: &str = "ietf-l2-topology:l2-network-attributes";
pub const L3_NETWORK_ATTRIBUTES: &str = "ietf-l3-unicast-topology:l3-topology-attributes";
pub const L2_NODE_ATTRIBUTES: &str = "ietf-l2-topology:l2-node-attributes";
pub const L3_NODE_ATTRIBUTES: &str = "ietf-l3-unicast-topology:l3-node-attributes";
pub const L2_TP_ATTRIBUTES: &str = "ietf-l2-topology:l2-termination-point-attributes";
pub const L3_TP_ATTRIBUTES: &str = "ietf-l3-unicast-topology:l3-termination-point-attributes";
pub const L2_LINK_ATTRIBUTES: &str = "ietf-l2-topology:l2-link-attributes";
pub const L3_LINK_ATTRIBUTES: &str = "ietf-l3-unicast-topology:l3-link-attributes";
