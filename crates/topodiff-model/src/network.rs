use serde_json::{Map, Value};

use crate::attribute::NetworkAttribute;
use crate::consts::*;
use crate::diff_state::{DiffState, EntityRef};
use crate::document::{self, Object};
use crate::error::ModelResult;
use crate::identity::Identified;
use crate::link::Link;
use crate::node::Node;
use crate::support::SupportingNetwork;

/// Topology layer declared by a network's `network-types`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    L2,
    L3,
}

/// One network (topology layer) of a document.
#[derive(Clone, Debug, PartialEq)]
pub struct Network {
    pub name: String,
    /// `network-types` object, carried verbatim.
    pub network_types: Object,
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub supports: Vec<SupportingNetwork>,
    pub attribute: NetworkAttribute,
    pub diff_state: Option<DiffState>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            network_types: Map::new(),
            nodes: Vec::new(),
            links: Vec::new(),
            supports: Vec::new(),
            attribute: NetworkAttribute::empty(),
            diff_state: None,
        }
    }

    /// Network path; the root of every descendant's path.
    pub fn path(&self) -> &str {
        &self.name
    }

    pub fn from_value(value: &Value) -> ModelResult<Self> {
        let map = document::as_object(value, NETWORK_KEY)?;
        let mut network = Self::new(document::str_field(map, "network-id", NETWORK_KEY)?);
        let path = network.name.clone();
        network.network_types = document::object_field(map, "network-types", &path)?
            .cloned()
            .unwrap_or_default();
        network.nodes = document::list_field(map, NODE_KEY, &path, |v, _| Node::from_value(v, &path))?;
        network.links = document::list_field(map, LINK_KEY, &path, |v, _| Link::from_value(v, &path))?;
        network.supports = document::list_field(
            map,
            SUPPORTING_NETWORK_KEY,
            &path,
            SupportingNetwork::from_value,
        )?;
        network.attribute = NetworkAttribute::from_object(map, &path)?;
        Ok(network)
    }

    pub fn to_value(&self) -> Value {
        let mut map = Object::new();
        map.insert("network-id".into(), self.name.clone().into());
        document::insert_state(&mut map, self.diff_state.as_ref());
        map.insert(
            "network-types".into(),
            Value::Object(self.network_types.clone()),
        );
        map.insert(NODE_KEY.into(), document::list_value(&self.nodes, Node::to_value));
        map.insert(LINK_KEY.into(), document::list_value(&self.links, Link::to_value));
        map.insert(
            SUPPORTING_NETWORK_KEY.into(),
            document::list_value(&self.supports, SupportingNetwork::to_value),
        );
        self.attribute.write_into(&mut map);
        Value::Object(map)
    }

    pub fn layer(&self) -> Option<Layer> {
        if self.network_types.contains_key(NWTYPE_L2) {
            Some(Layer::L2)
        } else if self.network_types.contains_key(NWTYPE_L3) {
            Some(Layer::L3)
        } else {
            None
        }
    }

    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// First link whose `link-id` is `name`.
    pub fn find_link(&self, name: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.name == name)
    }
}

impl Identified for Network {
    type Key<'a> = &'a str;

    fn identity(&self) -> Self::Key<'_> {
        &self.name
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.name.as_str())
    }

    fn diff_state(&self) -> Option<&DiffState> {
        self.diff_state.as_ref()
    }
}

/// Document root: every network of one topology snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Networks {
    pub networks: Vec<Network>,
}

impl Networks {
    pub fn new(networks: Vec<Network>) -> Self {
        Self { networks }
    }

    pub fn from_value(value: &Value) -> ModelResult<Self> {
        let root = document::as_object(value, "/")?;
        let Some(container) = document::object_field(root, NETWORKS_KEY, "")? else {
            return Ok(Self::default());
        };
        let networks = document::list_field(container, NETWORK_KEY, NETWORKS_KEY, |v, _| {
            Network::from_value(v)
        })?;
        Ok(Self { networks })
    }

    pub fn from_json(text: &str) -> ModelResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    pub fn to_value(&self) -> Value {
        let networks = document::list_value(&self.networks, Network::to_value);
        let mut container = Object::new();
        container.insert(NETWORK_KEY.into(), networks);
        let mut root = Object::new();
        root.insert(NETWORKS_KEY.into(), Value::Object(container));
        Value::Object(root)
    }

    pub fn find_network(&self, name: &str) -> Option<&Network> {
        self.networks.iter().find(|nw| nw.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "ietf-network:networks": {
                "network": [
                    {
                        "network-id": "layer2",
                        "network-types": { NWTYPE_L2: {} },
                        "node": [
                            { "node-id": "sw1", "ietf-network-topology:termination-point": [ { "tp-id": "p1" } ] },
                            { "node-id": "sw2", "ietf-network-topology:termination-point": [ { "tp-id": "p1" } ] }
                        ],
                        "ietf-network-topology:link": [
                            {
                                "link-id": "sw1,p1,sw2,p1",
                                "source": { "source-node": "sw1", "source-tp": "p1" },
                                "destination": { "dest-node": "sw2", "dest-tp": "p1" }
                            }
                        ],
                        "supporting-network": [ { "network-ref": "layer1" } ],
                        L2_NETWORK_ATTRIBUTES: { "name": "l2", "flags": ["x"] }
                    },
                    { "network-id": "layer1" }
                ]
            }
        })
    }

    #[test]
    fn parse_document() {
        let doc = Networks::from_value(&sample()).unwrap();
        assert_eq!(doc.networks.len(), 2);
        let l2 = doc.find_network("layer2").unwrap();
        assert_eq!(l2.layer(), Some(Layer::L2));
        assert_eq!(l2.nodes.len(), 2);
        assert_eq!(l2.find_node("sw2").unwrap().path, "layer2/sw2");
        assert!(l2.find_link("sw1,p1,sw2,p1").is_some());
        assert_eq!(l2.supports[0].network_ref, "layer1");
        assert!(!l2.attribute.is_empty());

        let l1 = doc.find_network("layer1").unwrap();
        assert_eq!(l1.layer(), None);
        assert!(l1.nodes.is_empty());
    }

    #[test]
    fn to_value_round_trips_document_shape() {
        let doc = Networks::from_value(&sample()).unwrap();
        let reparsed = Networks::from_value(&doc.to_value()).unwrap();
        assert_eq!(doc, reparsed);
    }

    #[test]
    fn empty_root_reads_as_no_networks() {
        let doc = Networks::from_value(&json!({})).unwrap();
        assert!(doc.networks.is_empty());
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = Networks::from_value(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, ModelError::UnexpectedType { expected: "object", .. }));
    }

    #[test]
    fn mistyped_node_list_is_rejected() {
        let doc = json!({ "ietf-network:networks": { "network": [ { "network-id": "x", "node": 3 } ] } });
        let err = Networks::from_value(&doc).unwrap_err();
        assert!(err.to_string().contains("x/node"));
    }

    #[test]
    fn invalid_json_text_is_rejected() {
        assert!(matches!(Networks::from_json("{"), Err(ModelError::Json(_))));
    }
}
