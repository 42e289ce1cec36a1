//! The `Diffable` trait, the backward check and attribute comparison.

use topodiff_model::{
    Attribute, AttributeSchema, AttributeValue, Classification, DiffState, EntityRef, Identified,
};

/// An entity kind that can be diffed against its matched counterpart.
///
/// Implementations never mutate their inputs: both operations build a new
/// entity whose diff state is set once, at construction.
pub trait Diffable: Identified + Clone {
    /// Diff `self` (left-hand snapshot) against `other` (right-hand snapshot),
    /// which has the same identity.
    ///
    /// The result keeps `self`'s identity, carries `other`'s content and is
    /// paired with `self`.
    fn diff(&self, other: &Self) -> Self;

    /// Copy of `self` with `forward` (added or deleted) stamped on it and on
    /// every descendant.
    fn fill_diff_state(&self, forward: Classification) -> Self;
}

/// Collects the verdicts of an entity's direct children.
///
/// A matched entity is `changed` as soon as one direct child is not `kept`,
/// and `kept` otherwise. Each level checks only its own children, so a deep
/// change reaches the root one level at a time.
#[derive(Debug, Default)]
pub struct BackwardCheck {
    changed: bool,
}

impl BackwardCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: Option<&DiffState>) -> Self {
        self.changed |= !state.is_some_and(DiffState::is_kept);
        self
    }

    pub fn item<T: Identified>(self, item: &T) -> Self {
        self.state(item.diff_state())
    }

    pub fn list<T: Identified>(self, items: &[T]) -> Self {
        items.iter().fold(self, |check, item| check.item(item))
    }

    pub fn attribute<L2, L3>(self, attribute: &Attribute<L2, L3>) -> Self {
        self.state(attribute.diff_state.as_ref())
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Final verdict for the entity paired with `pair`.
    pub fn verdict(self, pair: EntityRef) -> DiffState {
        if self.changed {
            DiffState::changed(pair)
        } else {
            DiffState::kept(pair)
        }
    }
}

/// Classify a pair of attribute values.
pub fn diff_single_value<L2, L3>(
    lhs: &AttributeValue<L2, L3>,
    rhs: &AttributeValue<L2, L3>,
) -> Classification
where
    L2: AttributeSchema,
    L3: AttributeSchema,
{
    if lhs == rhs {
        Classification::Kept
    } else if lhs.is_empty() {
        Classification::Added
    } else if rhs.is_empty() {
        Classification::Deleted
    } else {
        Classification::Changed
    }
}

/// Diff the attribute blocks of two matched entities owned by `owner`.
///
/// Kept, changed and added blocks carry the right-hand content; a deleted
/// block carries the left-hand content so it remains visible.
pub fn diff_attribute<L2, L3>(
    owner: &EntityRef,
    lhs: &Attribute<L2, L3>,
    rhs: &Attribute<L2, L3>,
) -> Attribute<L2, L3>
where
    L2: AttributeSchema,
    L3: AttributeSchema,
{
    let forward = diff_single_value(&lhs.value, &rhs.value);
    let (value, state) = match forward {
        Classification::Added => (rhs.value.clone(), DiffState::added()),
        Classification::Deleted => (lhs.value.clone(), DiffState::deleted()),
        matched => {
            let pair = owner.child(lhs.value.key().unwrap_or("attribute"));
            (rhs.value.clone(), DiffState::matched(matched, pair))
        }
    };
    Attribute {
        value,
        diff_state: Some(state),
    }
}

pub fn fill_attribute<L2, L3>(attribute: &Attribute<L2, L3>, forward: Classification) -> Attribute<L2, L3>
where
    L2: AttributeSchema,
    L3: AttributeSchema,
{
    attribute.clone().with_state(DiffState::terminal(forward))
}

#[cfg(test)]
mod tests {
    use super::*;
    use topodiff_model::{L2LinkAttribute, L3LinkAttribute, LinkAttribute, SupportingNetwork};

    fn link_attr(name: &str, flags: &[&str]) -> LinkAttribute {
        LinkAttribute::l2(L2LinkAttribute {
            name: name.into(),
            flags: flags.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        })
    }

    fn owner() -> EntityRef {
        EntityRef::new("nw/a,p1,b,p1")
    }

    #[test]
    fn equal_attributes_are_kept() {
        let a = link_attr("l", &["foo"]);
        let result = diff_attribute(&owner(), &a, &a);
        let state = result.diff_state.unwrap();
        assert_eq!(state.forward(), Classification::Kept);
        assert!(state.pair().is_some());
    }

    #[test]
    fn both_empty_is_kept() {
        let result = diff_attribute(&owner(), &LinkAttribute::empty(), &LinkAttribute::empty());
        assert_eq!(result.diff_state.unwrap().forward(), Classification::Kept);
    }

    #[test]
    fn differing_attributes_are_changed() {
        let a = link_attr("l", &["foo", "bar", "baz"]);
        let b = link_attr("l", &["foo", "bar"]);
        let result = diff_attribute(&owner(), &a, &b);
        assert_eq!(result.diff_state.unwrap().forward(), Classification::Changed);
        assert_eq!(result.value, b.value);
    }

    #[test]
    fn empty_left_is_added() {
        let b = link_attr("l", &[]);
        let result = diff_attribute(&owner(), &LinkAttribute::empty(), &b);
        let state = result.diff_state.unwrap();
        assert_eq!(state.forward(), Classification::Added);
        assert!(state.pair().is_none());
    }

    #[test]
    fn empty_right_is_deleted_and_keeps_left_content() {
        let a = link_attr("gone", &[]);
        let result = diff_attribute(&owner(), &a, &LinkAttribute::empty());
        assert_eq!(result.diff_state.unwrap().forward(), Classification::Deleted);
        assert_eq!(result.value, a.value);
    }

    #[test]
    fn layer_mismatch_is_changed() {
        let a = link_attr("l", &[]);
        let b = LinkAttribute::l3(L3LinkAttribute::default());
        assert_eq!(diff_single_value(&a.value, &b.value), Classification::Changed);
    }

    #[test]
    fn backward_check_promotes_on_any_non_kept_child() {
        let mut kept = SupportingNetwork::new("a");
        kept.diff_state = Some(DiffState::kept(EntityRef::new("a")));
        let mut added = SupportingNetwork::new("b");
        added.diff_state = Some(DiffState::added());

        let all_kept = BackwardCheck::new().list(std::slice::from_ref(&kept));
        assert!(!all_kept.is_changed());
        assert!(all_kept.verdict(EntityRef::new("x")).is_kept());

        let mixed = BackwardCheck::new().list(&[kept, added]);
        assert_eq!(
            mixed.verdict(EntityRef::new("x")).forward(),
            Classification::Changed
        );
    }

    #[test]
    fn fill_attribute_stamps_terminal_state() {
        let a = link_attr("l", &[]);
        let filled = fill_attribute(&a, Classification::Deleted);
        assert_eq!(filled.diff_state, Some(DiffState::deleted()));
        assert_eq!(filled.value, a.value);
    }
}
