use serde_json::Value;

use crate::attribute::NodeAttribute;
use crate::consts::{SUPPORTING_NODE_KEY, TP_KEY};
use crate::diff_state::{DiffState, EntityRef};
use crate::document::{self, Object};
use crate::error::ModelResult;
use crate::identity::Identified;
use crate::support::SupportingNode;
use crate::tp::TerminationPoint;

/// A node of a network, owning its termination points.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub path: String,
    pub termination_points: Vec<TerminationPoint>,
    pub supports: Vec<SupportingNode>,
    pub attribute: NodeAttribute,
    pub diff_state: Option<DiffState>,
}

impl Node {
    pub fn new(name: impl Into<String>, parent_path: &str) -> Self {
        let name = name.into();
        Self {
            path: format!("{parent_path}/{name}"),
            name,
            termination_points: Vec::new(),
            supports: Vec::new(),
            attribute: NodeAttribute::empty(),
            diff_state: None,
        }
    }

    pub fn from_value(value: &Value, parent_path: &str) -> ModelResult<Self> {
        let map = document::as_object(value, parent_path)?;
        let mut node = Self::new(document::str_field(map, "node-id", parent_path)?, parent_path);
        node.termination_points =
            document::list_field(map, TP_KEY, &node.path, |v, _| {
                TerminationPoint::from_value(v, &node.path)
            })?;
        node.supports =
            document::list_field(map, SUPPORTING_NODE_KEY, &node.path, SupportingNode::from_value)?;
        node.attribute = NodeAttribute::from_object(map, &node.path)?;
        Ok(node)
    }

    pub fn to_value(&self) -> Value {
        let mut map = Object::new();
        map.insert("node-id".into(), self.name.clone().into());
        document::insert_state(&mut map, self.diff_state.as_ref());
        map.insert(
            TP_KEY.into(),
            document::list_value(&self.termination_points, TerminationPoint::to_value),
        );
        map.insert(
            SUPPORTING_NODE_KEY.into(),
            document::list_value(&self.supports, SupportingNode::to_value),
        );
        self.attribute.write_into(&mut map);
        Value::Object(map)
    }

    /// First termination point named `name`.
    pub fn find_tp(&self, name: &str) -> Option<&TerminationPoint> {
        self.termination_points.iter().find(|tp| tp.name == name)
    }
}

impl Identified for Node {
    type Key<'a> = &'a str;

    fn identity(&self) -> Self::Key<'_> {
        &self.name
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.path.as_str())
    }

    fn diff_state(&self) -> Option<&DiffState> {
        self.diff_state.as_ref()
    }
}
