//! Entity model for topodiff.
//!
//! A topology document (IETF `ietf-network:networks`) is read into a typed
//! tree of networks, nodes, links and termination points. Each level carries
//! supporting references into lower layers and an optional L2/L3 attribute
//! block. Entities produced by a diff run additionally carry a [`DiffState`];
//! serialization writes it back under the reserved `_diff_state_` key.
//!
//! # Key Types
//!
//! - [`Networks`] / [`Network`] / [`Node`] / [`Link`] / [`TerminationPoint`] -- topology entities
//! - [`Identified`] -- identity-key matching used for correspondence
//! - [`DiffState`] / [`Classification`] -- per-entity diff verdict
//! - [`Attribute`] -- layer-specific attribute block

pub mod attribute;
pub mod consts;
pub mod diff_state;
mod document;
pub mod error;
pub mod identity;
pub mod link;
pub mod network;
pub mod node;
pub mod support;
pub mod tp;

pub use attribute::{
    Attribute, AttributeSchema, AttributeValue, L2LinkAttribute, L2NetworkAttribute,
    L2NodeAttribute, L2TpAttribute, L3LinkAttribute, L3NetworkAttribute, L3NodeAttribute,
    L3Prefix, L3TpAttribute, LinkAttribute, NetworkAttribute, NodeAttribute, TpAttribute,
    VlanIdName,
};
pub use diff_state::{Classification, DiffState, EntityRef};
pub use error::{ModelError, ModelResult};
pub use identity::Identified;
pub use link::Link;
pub use network::{Layer, Network, Networks};
pub use node::Node;
pub use support::{
    Direction, SupportingLink, SupportingNetwork, SupportingNode, SupportingTerminationPoint,
    TpRef,
};
pub use tp::TerminationPoint;
