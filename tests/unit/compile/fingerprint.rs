use super::*;

#[test]
fn equal_text_equal_fingerprint() {
    assert_eq!(fingerprint_css("a { }"), fingerprint_css("a { }"));
    assert_ne!(fingerprint_css("a { }"), fingerprint_css("a {  }"));
}

#[test]
fn display_is_fixed_width_hex() {
    let s = CssFingerprint(0xab).to_string();
    assert_eq!(s, "00000000000000ab");
    assert_eq!(fingerprint_css("").to_string().len(), 16);
}
