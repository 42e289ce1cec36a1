//! Supporting references (pointers into lower layers) and link endpoints.

use serde_json::{Map, Value};

use crate::diff_state::{DiffState, EntityRef};
use crate::document::{self, Object};
use crate::error::ModelResult;
use crate::identity::Identified;

/// `supporting-network` entry of a network.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportingNetwork {
    pub network_ref: String,
    pub diff_state: Option<DiffState>,
}

impl SupportingNetwork {
    pub fn new(network_ref: impl Into<String>) -> Self {
        Self {
            network_ref: network_ref.into(),
            diff_state: None,
        }
    }

    pub fn from_value(value: &Value, path: &str) -> ModelResult<Self> {
        let map = document::as_object(value, path)?;
        Ok(Self::new(document::str_field(map, "network-ref", path)?))
    }

    pub fn to_value(&self) -> Value {
        let mut map = Object::new();
        map.insert("network-ref".into(), self.network_ref.clone().into());
        document::insert_state(&mut map, self.diff_state.as_ref());
        Value::Object(map)
    }
}

impl Identified for SupportingNetwork {
    type Key<'a> = &'a str;

    fn identity(&self) -> Self::Key<'_> {
        &self.network_ref
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.network_ref.as_str())
    }

    fn diff_state(&self) -> Option<&DiffState> {
        self.diff_state.as_ref()
    }
}

/// `supporting-node` entry of a node.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportingNode {
    pub network_ref: String,
    pub node_ref: String,
    pub diff_state: Option<DiffState>,
}

impl SupportingNode {
    pub fn new(network_ref: impl Into<String>, node_ref: impl Into<String>) -> Self {
        Self {
            network_ref: network_ref.into(),
            node_ref: node_ref.into(),
            diff_state: None,
        }
    }

    pub fn from_value(value: &Value, path: &str) -> ModelResult<Self> {
        let map = document::as_object(value, path)?;
        Ok(Self::new(
            document::str_field(map, "network-ref", path)?,
            document::str_field(map, "node-ref", path)?,
        ))
    }

    pub fn to_value(&self) -> Value {
        let mut map = Object::new();
        map.insert("network-ref".into(), self.network_ref.clone().into());
        map.insert("node-ref".into(), self.node_ref.clone().into());
        document::insert_state(&mut map, self.diff_state.as_ref());
        Value::Object(map)
    }
}

impl Identified for SupportingNode {
    type Key<'a> = (&'a str, &'a str);

    fn identity(&self) -> Self::Key<'_> {
        (&self.network_ref, &self.node_ref)
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(format!("{}/{}", self.network_ref, self.node_ref))
    }

    fn diff_state(&self) -> Option<&DiffState> {
        self.diff_state.as_ref()
    }
}

/// `supporting-termination-point` entry of a termination point.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportingTerminationPoint {
    pub network_ref: String,
    pub node_ref: String,
    pub tp_ref: String,
    pub diff_state: Option<DiffState>,
}

impl SupportingTerminationPoint {
    pub fn new(
        network_ref: impl Into<String>,
        node_ref: impl Into<String>,
        tp_ref: impl Into<String>,
    ) -> Self {
        Self {
            network_ref: network_ref.into(),
            node_ref: node_ref.into(),
            tp_ref: tp_ref.into(),
            diff_state: None,
        }
    }

    pub fn from_value(value: &Value, path: &str) -> ModelResult<Self> {
        let map = document::as_object(value, path)?;
        Ok(Self::new(
            document::str_field(map, "network-ref", path)?,
            document::str_field(map, "node-ref", path)?,
            document::str_field(map, "tp-ref", path)?,
        ))
    }

    pub fn to_value(&self) -> Value {
        let mut map = Object::new();
        map.insert("network-ref".into(), self.network_ref.clone().into());
        map.insert("node-ref".into(), self.node_ref.clone().into());
        map.insert("tp-ref".into(), self.tp_ref.clone().into());
        document::insert_state(&mut map, self.diff_state.as_ref());
        Value::Object(map)
    }
}

impl Identified for SupportingTerminationPoint {
    type Key<'a> = (&'a str, &'a str, &'a str);

    fn identity(&self) -> Self::Key<'_> {
        (&self.network_ref, &self.node_ref, &self.tp_ref)
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(format!(
            "{}/{}/{}",
            self.network_ref, self.node_ref, self.tp_ref
        ))
    }

    fn diff_state(&self) -> Option<&DiffState> {
        self.diff_state.as_ref()
    }
}

/// `supporting-link` entry of a link.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportingLink {
    pub network_ref: String,
    pub link_ref: String,
    pub diff_state: Option<DiffState>,
}

impl SupportingLink {
    pub fn new(network_ref: impl Into<String>, link_ref: impl Into<String>) -> Self {
        Self {
            network_ref: network_ref.into(),
            link_ref: link_ref.into(),
            diff_state: None,
        }
    }

    pub fn from_value(value: &Value, path: &str) -> ModelResult<Self> {
        let map = document::as_object(value, path)?;
        Ok(Self::new(
            document::str_field(map, "network-ref", path)?,
            document::str_field(map, "link-ref", path)?,
        ))
    }

    pub fn to_value(&self) -> Value {
        let mut map = Object::new();
        map.insert("network-ref".into(), self.network_ref.clone().into());
        map.insert("link-ref".into(), self.link_ref.clone().into());
        document::insert_state(&mut map, self.diff_state.as_ref());
        Value::Object(map)
    }
}

impl Identified for SupportingLink {
    type Key<'a> = (&'a str, &'a str);

    fn identity(&self) -> Self::Key<'_> {
        (&self.network_ref, &self.link_ref)
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(format!("{}/{}", self.network_ref, self.link_ref))
    }

    fn diff_state(&self) -> Option<&DiffState> {
        self.diff_state.as_ref()
    }
}

/// Which end of a link an endpoint sits on. Selects the `source-*` or
/// `dest-*` field names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Source,
    Dest,
}

impl Direction {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Dest => "dest",
        }
    }

    /// Key of the endpoint object inside a link.
    pub fn link_key(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Dest => "destination",
        }
    }
}

/// Link endpoint: a termination point of a node in the link's network.
#[derive(Clone, Debug, PartialEq)]
pub struct TpRef {
    pub node_ref: String,
    pub tp_ref: String,
    /// Path of the owning network.
    pub parent_path: String,
    pub diff_state: Option<DiffState>,
}

impl TpRef {
    pub fn new(
        node_ref: impl Into<String>,
        tp_ref: impl Into<String>,
        parent_path: impl Into<String>,
    ) -> Self {
        Self {
            node_ref: node_ref.into(),
            tp_ref: tp_ref.into(),
            parent_path: parent_path.into(),
            diff_state: None,
        }
    }

    /// Read an endpoint object; absent endpoints read as empty references.
    pub(crate) fn from_object(
        map: Option<&Object>,
        direction: Direction,
        parent_path: &str,
    ) -> ModelResult<Self> {
        let Some(map) = map else {
            return Ok(Self::new("", "", parent_path));
        };
        let prefix = direction.prefix();
        let path = format!("{parent_path}/{}", direction.link_key());
        Ok(Self::new(
            document::str_field(map, &format!("{prefix}-node"), &path)?,
            document::str_field(map, &format!("{prefix}-tp"), &path)?,
            parent_path,
        ))
    }

    pub fn to_value(&self, direction: Direction) -> Value {
        let prefix = direction.prefix();
        let mut map = Map::new();
        map.insert(format!("{prefix}-node"), self.node_ref.clone().into());
        map.insert(format!("{prefix}-tp"), self.tp_ref.clone().into());
        document::insert_state(&mut map, self.diff_state.as_ref());
        Value::Object(map)
    }
}

impl Identified for TpRef {
    type Key<'a> = (&'a str, &'a str);

    fn identity(&self) -> Self::Key<'_> {
        (&self.node_ref, &self.tp_ref)
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(format!(
            "{}/{}/{}",
            self.parent_path, self.node_ref, self.tp_ref
        ))
    }

    fn diff_state(&self) -> Option<&DiffState> {
        self.diff_state.as_ref()
    }
}
