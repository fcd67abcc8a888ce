use super::*;

fn key(level: u8, position: u8, variant: Variant) -> StateKey {
    StateKey::from_raw(level, position, variant).unwrap()
}

#[test]
fn labels_match_authoring_conventions() {
    let base = key(2, 15, Variant::Normaal);
    let zeta = key(2, 15, Variant::Zeta);

    assert_eq!(base.to_string(), "normaal-2-15");
    assert_eq!(zeta.to_string(), "ζ-2-15");
    assert_eq!(base.display_label(), "L2 P15");
    assert_eq!(zeta.display_label(), "L2 P15");
    assert_eq!(base.full_label(), "L2 P15");
    assert_eq!(zeta.full_label(), "L2 P15 [ζ]");
    assert_eq!(base.short_label(), "L2P15");
    assert_eq!(zeta.short_label(), "ζL2P15");
}

#[test]
fn short_labels_parse_back() {
    for variant in Variant::ALL {
        let k = key(3, 17, variant);
        assert_eq!(StateKey::parse_short_label(&k.short_label()).unwrap(), k);
    }
    assert!(StateKey::parse_short_label("L9P15").is_err());
    assert!(StateKey::parse_short_label("L2").is_err());
    assert!(StateKey::parse_short_label("θL2P15").is_err());
    assert!(StateKey::parse_short_label("").is_err());
}

#[test]
fn labels_with_signed_numbers_are_rejected() {
    assert!(StateKey::parse_short_label("L+2P+15").is_err());
    assert!(StateKey::parse_short_label("ζL2P+15").is_err());
    assert!(StateKey::parse_short_label("LP15").is_err());
    assert!("normaal-+2-15".parse::<StateKey>().is_err());
    assert!("ζ-2-+15".parse::<StateKey>().is_err());
}

#[test]
fn storage_keys_parse_back() {
    let k: StateKey = "η-4-13".parse().unwrap();
    assert_eq!(k, key(4, 13, Variant::Eta));
    assert!("normaal-4".parse::<StateKey>().is_err());
    assert!("normaal-4-40".parse::<StateKey>().is_err());
}

#[test]
fn new_state_has_no_bird_and_flies() {
    let s = State::new(key(0, 13, Variant::Normaal));
    assert_eq!(s.bird_level, None);
    assert_eq!(s.bird_position, None);
    assert_eq!(s.bird_mode, BirdMode::Flying);
    assert!(!s.has_bird());
    assert!(s.is_base());
}

#[test]
fn bird_is_visible_only_with_both_coordinates() {
    let mut s = State::new(key(1, 14, Variant::Zeta));
    s.bird_level = Some(Level::new(3).unwrap());
    assert!(!s.has_bird());
    s.bird_position = Some(Position::new(16).unwrap());
    assert_eq!(
        s.bird_cell(),
        Some((Level::new(3).unwrap(), Position::new(16).unwrap()))
    );
}

#[test]
fn patch_only_touches_given_fields() {
    let mut s = State::new(key(1, 14, Variant::Zeta));
    StatePatch::bird_at(Level::new(2).unwrap(), Position::new(18).unwrap())
        .with_mode(BirdMode::Grabbing)
        .apply(&mut s);
    assert!(s.has_bird());
    assert_eq!(s.bird_mode, BirdMode::Grabbing);

    StatePatch {
        bird_position: Some(None),
        ..StatePatch::default()
    }
    .apply(&mut s);
    assert_eq!(s.bird_level, Some(Level::new(2).unwrap()));
    assert_eq!(s.bird_position, None);
    assert_eq!(s.bird_mode, BirdMode::Grabbing);

    StatePatch::clear_bird().apply(&mut s);
    assert_eq!(s.bird_level, None);
    assert_eq!(s.key(), key(1, 14, Variant::Zeta));
}

#[test]
fn bird_mode_wire_names() {
    assert_eq!("Grabbing".parse::<BirdMode>().unwrap(), BirdMode::Grabbing);
    assert!("diving".parse::<BirdMode>().is_err());
    assert_eq!(
        serde_json::to_string(&BirdMode::Attacking).unwrap(),
        "\"attacking\""
    );
}
