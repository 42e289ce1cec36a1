use topodiff_model::{AttributeValue, Classification, Identified, Network};

use super::fixtures::*;
use crate::diff_networks;

fn diffed() -> Network {
    let result = diff_networks(&link_snapshot_a(), &link_snapshot_b());
    assert_eq!(result.networks.len(), 1);
    result.networks.into_iter().next().unwrap()
}

#[test]
fn kept_link_is_kept_in_both_directions() {
    let nw = diffed();
    assert_eq!(link_state(&nw, ["kept1", "p1", "kept2", "p1"]), Some(Classification::Kept));
    assert_eq!(link_state(&nw, ["kept2", "p1", "kept1", "p1"]), Some(Classification::Kept));
}

#[test]
fn removed_link_is_deleted_in_both_directions() {
    let nw = diffed();
    assert_eq!(
        link_state(&nw, ["deleted1", "p1", "deleted2", "p1"]),
        Some(Classification::Deleted)
    );
    assert_eq!(
        link_state(&nw, ["deleted2", "p1", "deleted1", "p1"]),
        Some(Classification::Deleted)
    );
}

#[test]
fn new_link_is_added() {
    let nw = diffed();
    assert_eq!(link_state(&nw, ["added1", "p1", "added", "p1"]), Some(Classification::Added));
    assert_eq!(link_state(&nw, ["added", "p1", "added1", "p1"]), Some(Classification::Added));
}

#[test]
fn attribute_change_marks_link_changed() {
    let nw = diffed();
    assert_eq!(
        link_state(&nw, ["link_attr_kept", "p1", "kept2", "p1"]),
        Some(Classification::Kept)
    );
    assert_eq!(
        link_state(&nw, ["link_attr_changed", "p1", "changed2", "p1"]),
        Some(Classification::Changed)
    );

    let link = nw
        .links
        .iter()
        .find(|l| l.identity() == ("link_attr_changed", "p1", "changed2", "p1"))
        .unwrap();
    match &link.attribute.value {
        AttributeValue::L2(attr) => assert_eq!(attr.flags, vec!["foo", "bar"]),
        other => panic!("expected L2 attribute, got {:?}", other),
    }
    assert_eq!(
        link.attribute.diff_state.as_ref().map(|s| s.forward()),
        Some(Classification::Changed)
    );
}

#[test]
fn support_loss_promotes_link_via_backward_check() {
    let nw = diffed();
    let link = nw
        .links
        .iter()
        .find(|l| l.identity() == ("link_support_deleted", "p1", "deleted2", "p2"))
        .unwrap();
    assert_eq!(
        link.diff_state.as_ref().map(|s| s.forward()),
        Some(Classification::Changed)
    );
    let supports: Vec<_> = link
        .supports
        .iter()
        .map(|s| (s.network_ref.as_str(), s.diff_state.as_ref().map(|d| d.forward())))
        .collect();
    assert_eq!(
        supports,
        vec![
            ("foo", Some(Classification::Kept)),
            ("bar", Some(Classification::Deleted)),
        ]
    );
}

#[test]
fn support_gain_and_replacement_change_link() {
    let nw = diffed();
    assert_eq!(
        link_state(&nw, ["link_support_kept", "p1", "kept2", "p2"]),
        Some(Classification::Kept)
    );
    assert_eq!(
        link_state(&nw, ["link_support_added", "p1", "added2", "p2"]),
        Some(Classification::Changed)
    );
    // `foo a,b,c,d` and `foo a,b,cc,dd` are different references.
    assert_eq!(
        link_state(&nw, ["link_support_changed", "p1", "changed2", "p2"]),
        Some(Classification::Changed)
    );
}

#[test]
fn result_order_is_left_links_then_added() {
    let nw = diffed();
    let a = link_snapshot_a();
    let left_count = a.networks[0].links.len();
    let names: Vec<_> = nw.links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names.len(), left_count + 2);
    assert_eq!(names[0], "kept1,p1,kept2,p1");
    assert_eq!(names[2], "deleted1,p1,deleted2,p1");
    assert_eq!(names[left_count], "added1,p1,added,p1");
    assert_eq!(names[left_count + 1], "added,p1,added1,p1");
}

#[test]
fn network_with_link_changes_is_changed() {
    let nw = diffed();
    assert_eq!(
        nw.diff_state.as_ref().map(|s| s.forward()),
        Some(Classification::Changed)
    );
}
