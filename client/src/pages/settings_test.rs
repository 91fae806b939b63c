use super::*;

#[test]
fn validate_display_name_trims() {
    assert_eq!(validate_display_name("  Ada Lovelace "), Ok("Ada Lovelace".to_owned()));
}

#[test]
fn validate_display_name_rejects_blank() {
    assert_eq!(validate_display_name("   "), Err("Display name cannot be empty."));
}

#[test]
fn validate_display_name_limits_characters_not_bytes() {
    let at_limit = "é".repeat(MAX_DISPLAY_NAME_CHARS);
    assert_eq!(validate_display_name(&at_limit), Ok(at_limit.clone()));
    let over = "a".repeat(MAX_DISPLAY_NAME_CHARS + 1);
    assert_eq!(validate_display_name(&over), Err("Display name must be 80 characters or fewer."));
}
