use super::*;

#[test]
fn parses_json_booleans() {
    assert_eq!(parse_preference("true"), Some(true));
    assert_eq!(parse_preference(" false\n"), Some(false));
}

#[test]
fn ignores_non_boolean_values() {
    assert_eq!(parse_preference(""), None);
    assert_eq!(parse_preference("\"true\""), None);
    assert_eq!(parse_preference("1"), None);
}

#[test]
fn theme_names() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_off_browser() {
    assert!(!read_preference());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_flips_value_off_browser() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
