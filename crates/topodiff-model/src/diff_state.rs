use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// How an entity relates to its counterpart in the other snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Present in both snapshots with no difference below it.
    Kept,
    /// Present only in the right-hand snapshot.
    Added,
    /// Present only in the left-hand snapshot.
    Deleted,
    /// Present in both snapshots, but something below it differs.
    Changed,
}

impl Classification {
    /// All classifications, in display order.
    pub const ALL: [Classification; 4] = [Self::Kept, Self::Added, Self::Deleted, Self::Changed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kept => "kept",
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Changed => "changed",
        }
    }

    /// `true` for classifications that only exist on one side.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Added | Self::Deleted)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ownership-free reference to an entity, expressed as its path in the
/// topology (`network/node/tp`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityRef(String);

impl EntityRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Reference to a named part of this entity.
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}/{}", self.0, segment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Diff verdict attached to every entity of a diff-result tree.
///
/// `pair` points at the left-hand counterpart and is present only for
/// `kept` and `changed` entities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffState {
    forward: Classification,
    pair: Option<EntityRef>,
}

impl DiffState {
    /// A matched entity, paired with its left-hand counterpart.
    ///
    /// `forward` must be `Kept` or `Changed`.
    pub fn matched(forward: Classification, pair: EntityRef) -> Self {
        debug_assert!(!forward.is_terminal(), "matched state must be kept or changed");
        Self {
            forward,
            pair: Some(pair),
        }
    }

    pub fn kept(pair: EntityRef) -> Self {
        Self::matched(Classification::Kept, pair)
    }

    pub fn changed(pair: EntityRef) -> Self {
        Self::matched(Classification::Changed, pair)
    }

    pub fn added() -> Self {
        Self {
            forward: Classification::Added,
            pair: None,
        }
    }

    pub fn deleted() -> Self {
        Self {
            forward: Classification::Deleted,
            pair: None,
        }
    }

    /// Unpaired state used when stamping a whole subtree.
    ///
    /// `forward` must be `Added` or `Deleted`.
    pub fn terminal(forward: Classification) -> Self {
        debug_assert!(forward.is_terminal(), "terminal state must be added or deleted");
        Self {
            forward,
            pair: None,
        }
    }

    pub fn forward(&self) -> Classification {
        self.forward
    }

    pub fn pair(&self) -> Option<&EntityRef> {
        self.pair.as_ref()
    }

    pub fn is_kept(&self) -> bool {
        self.forward == Classification::Kept
    }

    /// Document form stored under the reserved diff-state key.
    pub fn to_value(&self) -> Value {
        json!({ "forward": self.forward })
    }
}
