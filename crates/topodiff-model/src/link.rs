use serde_json::Value;

use crate::attribute::LinkAttribute;
use crate::consts::SUPPORTING_LINK_KEY;
use crate::diff_state::{DiffState, EntityRef};
use crate::document::{self, Object};
use crate::error::ModelResult;
use crate::identity::Identified;
use crate::support::{Direction, SupportingLink, TpRef};

/// A unidirectional link between two termination points.
///
/// A link is identified by its endpoints, not by `link-id`. A bidirectional
/// connection is two independent links.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub name: String,
    pub path: String,
    pub source: TpRef,
    pub destination: TpRef,
    pub supports: Vec<SupportingLink>,
    pub attribute: LinkAttribute,
    pub diff_state: Option<DiffState>,
}

impl Link {
    /// Link named after its endpoints (`src,stp,dst,dtp`).
    pub fn new(
        source: (&str, &str),
        destination: (&str, &str),
        parent_path: &str,
    ) -> Self {
        let name = default_link_id(source, destination);
        Self {
            path: format!("{parent_path}/{name}"),
            name,
            source: TpRef::new(source.0, source.1, parent_path),
            destination: TpRef::new(destination.0, destination.1, parent_path),
            supports: Vec::new(),
            attribute: LinkAttribute::empty(),
            diff_state: None,
        }
    }

    pub fn from_value(value: &Value, parent_path: &str) -> ModelResult<Self> {
        let map = document::as_object(value, parent_path)?;
        let source = TpRef::from_object(
            document::object_field(map, Direction::Source.link_key(), parent_path)?,
            Direction::Source,
            parent_path,
        )?;
        let destination = TpRef::from_object(
            document::object_field(map, Direction::Dest.link_key(), parent_path)?,
            Direction::Dest,
            parent_path,
        )?;
        let mut name = document::str_field(map, "link-id", parent_path)?;
        if name.is_empty() {
            name = default_link_id(
                (source.node_ref.as_str(), source.tp_ref.as_str()),
                (destination.node_ref.as_str(), destination.tp_ref.as_str()),
            );
        }
        let path = format!("{parent_path}/{name}");
        let supports =
            document::list_field(map, SUPPORTING_LINK_KEY, &path, SupportingLink::from_value)?;
        let attribute = LinkAttribute::from_object(map, &path)?;
        Ok(Self {
            name,
            path,
            source,
            destination,
            supports,
            attribute,
            diff_state: None,
        })
    }

    pub fn to_value(&self) -> Value {
        let mut map = Object::new();
        map.insert("link-id".into(), self.name.clone().into());
        document::insert_state(&mut map, self.diff_state.as_ref());
        map.insert(
            Direction::Source.link_key().into(),
            self.source.to_value(Direction::Source),
        );
        map.insert(
            Direction::Dest.link_key().into(),
            self.destination.to_value(Direction::Dest),
        );
        map.insert(
            SUPPORTING_LINK_KEY.into(),
            document::list_value(&self.supports, SupportingLink::to_value),
        );
        self.attribute.write_into(&mut map);
        Value::Object(map)
    }

    /// The same link in the opposite direction (no supports, no attribute).
    pub fn reversed(&self) -> Self {
        Self::new(
            (self.destination.node_ref.as_str(), self.destination.tp_ref.as_str()),
            (self.source.node_ref.as_str(), self.source.tp_ref.as_str()),
            &self.source.parent_path,
        )
    }
}

fn default_link_id(source: (&str, &str), destination: (&str, &str)) -> String {
    [source.0, source.1, destination.0, destination.1].join(",")
}

impl Identified for Link {
    type Key<'a> = (&'a str, &'a str, &'a str, &'a str);

    fn identity(&self) -> Self::Key<'_> {
        (
            &self.source.node_ref,
            &self.source.tp_ref,
            &self.destination.node_ref,
            &self.destination.tp_ref,
        )
    }

    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.path.as_str())
    }

    fn diff_state(&self) -> Option<&DiffState> {
        self.diff_state.as_ref()
    }
}
