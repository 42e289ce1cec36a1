use serde_json::Value;

use crate::attribute::TpAttribute;
use crate::consts::SUPPORTING_TP_KEY;
use crate::diff_state::{DiffState, EntityRef};
use crate::document::{self, Object};
use crate::error::ModelResult;
use crate::identity::Identified;
use crate::support::SupportingTerminationPoint;

/// A termination point (interface/port) of a node.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminationPoint {
    pub name: String,
    pub path: String,
    pub supports: Vec<SupportingTerminationPoint>,
    pub attribute: TpAttribute,
    pub diff_state: Option<DiffState>,
}

impl TerminationPoint {
    pub fn new(name: impl Into<String>, parent_path: &str) -> Self {
        let name = name.into();
        Self {
            path: format!("{parent_path}/{name}"),
            name,
            supports: Vec::new(),
            attribute: TpAttribute::empty(),
            diff_state: None,
        }
    }

    pub fn from_value(value: &Value, parent_path: &str) -> ModelResult<Self> {
        let map = document::as_object(value, parent_path)?;
        let mut tp = Self::new(document::str_field(map, "tp-id", parent_path)?, parent_path);
        tp.supports = document::list_field(
            map,
            SUPPORTING_TP_KEY,
            &tp.path,
            SupportingTerminationPoint::from_value,
        )?;
        tp.attribute = TpAttribute::from_object(map, &tp.path)?;
        Ok(tp)
    }

    pub fn to_value(&self) -> Value {
        let mut map = Object::new();
        map.insert("tp-id".into(), self.name.clone().into());
        document::insert_state(&mut map, self.diff_state.as_ref());
        map.insert(
            SUPPORTING_TP_KEY.into(),
            document::list_value(&self.supports, SupportingTerminationPoint::to_value),
        );
        self.attribute.write_into(&mut map);
        Value::Object(map)
    }
}

impl Identified for TerminationPoint {
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
