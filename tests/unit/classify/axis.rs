use super::*;
use crate::foundation::coords::Variant;

fn state(level: u8, position: u8, variant: Variant) -> State {
    State::new(StateKey::from_raw(level, position, variant).unwrap())
}

#[test]
fn single_axis_changes() {
    let a = state(0, 13, Variant::Normaal);
    assert_eq!(classify(&a, &state(1, 13, Variant::Normaal)), Axis::Level);
    assert_eq!(classify(&a, &state(0, 14, Variant::Normaal)), Axis::Position);
    assert_eq!(classify(&a, &state(0, 13, Variant::Zeta)), Axis::Variant);
}

#[test]
fn multi_axis_changes_take_highest_priority() {
    let a = state(0, 13, Variant::Normaal);
    assert_eq!(classify(&a, &state(1, 14, Variant::Normaal)), Axis::Level);
    assert_eq!(classify(&a, &state(1, 14, Variant::Eta)), Axis::Level);
    assert_eq!(classify(&a, &state(0, 18, Variant::Eta)), Axis::Position);
}

#[test]
fn identical_triples_are_none() {
    let a = state(2, 15, Variant::Zeta);
    assert_eq!(classify(&a, &a.clone()), Axis::None);
}

#[test]
fn classification_is_direction_independent() {
    let a = state(3, 16, Variant::Normaal);
    let b = state(3, 16, Variant::Eta);
    assert_eq!(classify(&a, &b), classify(&b, &a));
}

#[test]
fn styles_are_a_fixed_lookup() {
    assert_eq!(Axis::Level.icon(), "↕");
    assert_eq!(Axis::Position.icon(), "↔");
    assert_eq!(Axis::Variant.icon(), "⟳");
    assert_eq!(Axis::None.icon(), "→");
    assert_eq!(Axis::Level.color(), "#22d3ee");
    assert_eq!(Axis::Position.color(), "#f59e0b");
    assert_eq!(Axis::Variant.color(), "#e879f9");
    assert_eq!(Axis::None.color(), "#3b82f6");
}

#[test]
fn axis_names_round_trip_through_from_str() {
    for axis in Axis::ALL {
        assert_eq!(axis.as_str().parse::<Axis>().unwrap(), axis);
    }
    assert!("diagonal".parse::<Axis>().is_err());
}
