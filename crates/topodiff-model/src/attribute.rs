//! Layer-specific attribute blocks attached to networks, nodes, links and
//! termination points.
//!
//! Each level has an L2 and an L3 schema. A block is stored under the
//! schema's namespaced key; only one of the two is expected per entity.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::*;
use crate::diff_state::DiffState;
use crate::document::{self, Object};
use crate::error::{ModelError, ModelResult};

/// A typed attribute schema stored under a fixed document key.
pub trait AttributeSchema:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned
{
    const KEY: &'static str;
}

/// Content of an attribute block.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AttributeValue<L2, L3> {
    #[default]
    Empty,
    L2(L2),
    L3(L3),
}

impl<L2: AttributeSchema, L3: AttributeSchema> AttributeValue<L2, L3> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Document key for this block, `None` when empty.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::L2(_) => Some(L2::KEY),
            Self::L3(_) => Some(L3::KEY),
        }
    }

    fn body_value(&self) -> Option<Value> {
        // Schemas are plain data; serializing them cannot fail.
        match self {
            Self::Empty => None,
            Self::L2(body) => Some(serde_json::to_value(body).unwrap_or_default()),
            Self::L3(body) => Some(serde_json::to_value(body).unwrap_or_default()),
        }
    }
}

/// An attribute block together with its diff verdict.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attribute<L2, L3> {
    pub value: AttributeValue<L2, L3>,
    pub diff_state: Option<DiffState>,
}

impl<L2: AttributeSchema, L3: AttributeSchema> Attribute<L2, L3> {
    pub fn empty() -> Self {
        Self {
            value: AttributeValue::Empty,
            diff_state: None,
        }
    }

    pub fn l2(body: L2) -> Self {
        Self {
            value: AttributeValue::L2(body),
            diff_state: None,
        }
    }

    pub fn l3(body: L3) -> Self {
        Self {
            value: AttributeValue::L3(body),
            diff_state: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn with_state(self, state: DiffState) -> Self {
        Self {
            diff_state: Some(state),
            ..self
        }
    }

    /// Read the block from its owning entity's object.
    ///
    /// A block holding nothing but the diff-state marker reads as empty.
    pub(crate) fn from_object(map: &Object, path: &str) -> ModelResult<Self> {
        if let Some(body) = schema_body::<L2>(map, path)? {
            return Ok(Self::l2(body));
        }
        if let Some(body) = schema_body::<L3>(map, path)? {
            return Ok(Self::l3(body));
        }
        Ok(Self::empty())
    }

    /// Write the block into its owning entity's object. Empty blocks are
    /// left out.
    pub(crate) fn write_into(&self, map: &mut Object) {
        let (Some(key), Some(Value::Object(mut body))) = (self.value.key(), self.value.body_value())
        else {
            return;
        };
        document::insert_state(&mut body, self.diff_state.as_ref());
        map.insert(key.to_string(), Value::Object(body));
    }
}

fn schema_body<S: AttributeSchema>(map: &Object, path: &str) -> ModelResult<Option<S>> {
    let Some(block) = document::object_field(map, S::KEY, path)? else {
        return Ok(None);
    };
    let content = document::without_marker(block);
    if content.is_empty() {
        return Ok(None);
    }
    serde_json::from_value(Value::Object(content))
        .map(Some)
        .map_err(|source| ModelError::Attribute {
            path: format!("{path}/{}", S::KEY),
            source,
        })
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct L2NetworkAttribute {
    pub name: String,
    pub flags: Vec<String>,
}

impl AttributeSchema for L2NetworkAttribute {
    const KEY: &'static str = L2_NETWORK_ATTRIBUTES;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct L3NetworkAttribute {
    pub name: String,
    pub flags: Vec<String>,
}

impl AttributeSchema for L3NetworkAttribute {
    const KEY: &'static str = L3_NETWORK_ATTRIBUTES;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct L2NodeAttribute {
    pub name: String,
    pub description: String,
    pub management_address: Vec<String>,
    pub sys_mac_address: String,
    pub management_vid: u64,
    pub flags: Vec<String>,
}

impl AttributeSchema for L2NodeAttribute {
    const KEY: &'static str = L2_NODE_ATTRIBUTES;
}

/// Routing prefix announced by an L3 node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct L3Prefix {
    pub prefix: String,
    pub metric: u64,
    pub flags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct L3NodeAttribute {
    pub name: String,
    pub flags: Vec<String>,
    pub router_id: Vec<String>,
    pub prefix: Vec<L3Prefix>,
}

impl AttributeSchema for L3NodeAttribute {
    const KEY: &'static str = L3_NODE_ATTRIBUTES;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct VlanIdName {
    pub vlan_id: u64,
    pub vlan_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct L2TpAttribute {
    pub description: String,
    pub max_frame_size: u64,
    pub mac_address: String,
    pub eth_encapsulation: String,
    pub port_number: Vec<u64>,
    pub vlan_id_name: Vec<VlanIdName>,
    pub tp_state: String,
}

impl AttributeSchema for L2TpAttribute {
    const KEY: &'static str = L2_TP_ATTRIBUTES;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct L3TpAttribute {
    pub ip_address: Vec<String>,
}

impl AttributeSchema for L3TpAttribute {
    const KEY: &'static str = L3_TP_ATTRIBUTES;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct L2LinkAttribute {
    pub name: String,
    pub flags: Vec<String>,
    pub rate: u64,
    pub delay: u64,
    pub srlg: String,
}

impl AttributeSchema for L2LinkAttribute {
    const KEY: &'static str = L2_LINK_ATTRIBUTES;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct L3LinkAttribute {
    pub name: String,
    pub flags: Vec<String>,
    pub metric1: u64,
    pub metric2: u64,
}

impl AttributeSchema for L3LinkAttribute {
    const KEY: &'static str = L3_LINK_ATTRIBUTES;
}

pub type NetworkAttribute = Attribute<L2NetworkAttribute, L3NetworkAttribute>;
pub type NodeAttribute = Attribute<L2NodeAttribute, L3NodeAttribute>;
pub type TpAttribute = Attribute<L2TpAttribute, L3TpAttribute>;
pub type LinkAttribute = Attribute<L2LinkAttribute, L3LinkAttribute>;
