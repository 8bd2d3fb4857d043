//! Role and privilege levels that decide which badges a user gets.
//!
//! Records may carry a numeric access level instead of explicit flags. Higher values
//! imply a superset of lower capabilities, so a Sysop is also a moderator. Use
//! [role_name] for display.
/// Role / privilege level constants
pub const LEVEL_USER: u8 = 1;
pub const LEVEL_MODERATOR: u8 = 5;
pub const LEVEL_SYSOP: u8 = 10;

/// Return the human‑readable role name for a numeric level.
///
/// Levels ≥10 are treated as "Sysop", ≥5 as "Moderator", otherwise "User".
pub fn role_name(level: u8) -> &'static str {
    if is_admin_level(level) {
        "Sysop"
    } else if is_moderator_level(level) {
        "Moderator"
    } else {
        "User"
    }
}

/// Admin (staff badge) at Sysop level and above.
pub fn is_admin_level(level: u8) -> bool {
    level >= LEVEL_SYSOP
}

/// Moderator (mod badge) at Moderator level and above.
pub fn is_moderator_level(level: u8) -> bool {
    level >= LEVEL_MODERATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_follow_thresholds() {
        assert_eq!(role_name(0), "User");
        assert_eq!(role_name(LEVEL_USER), "User");
        assert_eq!(role_name(LEVEL_MODERATOR), "Moderator");
        assert_eq!(role_name(7), "Moderator");
        assert_eq!(role_name(LEVEL_SYSOP), "Sysop");
        assert_eq!(role_name(255), "Sysop");
    }

    #[test]
    fn sysop_is_also_moderator() {
        assert!(is_admin_level(LEVEL_SYSOP));
        assert!(is_moderator_level(LEVEL_SYSOP));
        assert!(!is_admin_level(LEVEL_MODERATOR));
        assert!(!is_moderator_level(LEVEL_USER));
    }
}
