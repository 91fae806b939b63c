use super::*;

#[test]
fn root_link_is_active_only_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/references"));
}

#[test]
fn section_link_matches_nested_paths() {
    assert!(is_active("/settings", "/settings"));
    assert!(is_active("/settings", "/settings/account"));
    assert!(!is_active("/settings", "/settingsx"));
}

#[test]
fn initials_uses_first_alphanumeric_character() {
    assert_eq!(initials("ada lovelace"), "A");
    assert_eq!(initials("  @bob"), "B");
    assert_eq!(initials(""), "?");
}
