use super::*;
use crate::foundation::coords::Variant;

fn key(level: u8, position: u8, variant: Variant) -> StateKey {
    StateKey::from_raw(level, position, variant).unwrap()
}

#[test]
fn add_classifies_and_defaults_label() {
    let states = StateRegistry::new();
    let mut set = TransitionSet::new();
    let a = key(0, 13, Variant::Normaal);
    let b = key(1, 13, Variant::Normaal);

    let t = set.add_transition(&states, a, b, None).unwrap();
    assert_eq!(t.axis(), Axis::Level);
    assert_eq!(t.label(), "↕");
    assert_eq!(t.id().to_string(), "normaal-0-13→normaal-1-13");
}

#[test]
fn explicit_label_is_kept_and_empty_label_falls_back() {
    let states = StateRegistry::new();
    let mut set = TransitionSet::new();
    let a = key(0, 13, Variant::Normaal);

    let t = set
        .add_transition(&states, a, key(0, 14, Variant::Normaal), Some("vlucht"))
        .unwrap();
    assert_eq!(t.label(), "vlucht");
    let t = set
        .add_transition(&states, a, key(0, 15, Variant::Normaal), Some(""))
        .unwrap();
    assert_eq!(t.label(), "↔");
}

#[test]
fn refuses_self_edges_duplicates_and_unknown_endpoints() {
    let states = StateRegistry::new();
    let mut set = TransitionSet::new();
    let a = key(2, 15, Variant::Normaal);
    let b = key(2, 16, Variant::Normaal);

    assert!(set.add_transition(&states, a, a, None).is_none());
    assert!(set.is_empty());

    assert!(set.add_transition(&states, a, b, None).is_some());
    assert!(set.add_transition(&states, a, b, Some("again")).is_none());
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().unwrap().label(), "↔");

    // Reverse direction is a different ordered pair.
    assert!(set.add_transition(&states, b, a, None).is_some());
    assert_eq!(set.len(), 2);

    let ghost = key(2, 15, Variant::Zeta);
    assert!(set.add_transition(&states, a, ghost, None).is_none());
    assert!(set.add_transition(&states, ghost, a, None).is_none());
    assert_eq!(set.len(), 2);
}

#[test]
fn queries_filter_by_endpoint_and_axis() {
    let mut states = StateRegistry::new();
    let a = key(1, 14, Variant::Normaal);
    let b = key(2, 14, Variant::Normaal);
    let c = key(1, 14, Variant::Eta);
    states.add_state(c);

    let mut set = TransitionSet::new();
    set.add_transition(&states, a, b, None);
    set.add_transition(&states, b, a, None);
    set.add_transition(&states, a, c, None);

    assert_eq!(set.outgoing(a).count(), 2);
    assert_eq!(set.incoming(a).count(), 1);
    assert_eq!(set.touching(a).count(), 3);
    assert_eq!(set.touching(c).count(), 1);
    assert_eq!(set.by_axis(Axis::Level).count(), 2);
    assert_eq!(set.by_axis(Axis::Variant).count(), 1);
    assert_eq!(set.by_axis(Axis::Position).count(), 0);
}

#[test]
fn remove_and_cascade() {
    let states = StateRegistry::new();
    let a = key(0, 13, Variant::Normaal);
    let b = key(0, 14, Variant::Normaal);
    let c = key(0, 15, Variant::Normaal);

    let mut set = TransitionSet::new();
    set.add_transition(&states, a, b, None);
    set.add_transition(&states, b, c, None);
    set.add_transition(&states, a, c, None);

    assert!(set.remove_transition(TransitionId::new(a, c)).is_some());
    assert!(set.remove_transition(TransitionId::new(a, c)).is_none());

    assert_eq!(set.cascade_on_state_removal(b), 2);
    assert!(set.is_empty());
    assert_eq!(set.cascade_on_state_removal(b), 0);
}
