//! Batch rendering of user records loaded from JSON, as used by the CLI.

use anyhow::{anyhow, Result};
use log::{debug, info};
use tokio::fs;

use crate::config::BadgeConfig;
use crate::error::PresenterError;
use crate::markup::RenderContext;
use crate::presenter::UserPresenter;
use crate::roles::role_name;
use crate::user::{DisplayUser, UserRecord};

/// Read a JSON array of user records and validate each one.
pub async fn load_users(path: &str) -> Result<Vec<UserRecord>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| anyhow!("Failed to read users file {}: {}", path, e))?;

    let mut users: Vec<UserRecord> = serde_json::from_str(&content)
        .map_err(|e| anyhow!("Failed to parse users file {}: {}", path, e))?;

    for (idx, user) in users.iter_mut().enumerate() {
        user.validate()
            .map_err(|e| anyhow!("User #{} in {}: {}", idx + 1, path, e))?;
    }
    info!("Loaded {} user record(s) from {}", users.len(), path);
    Ok(users)
}

/// Build and validate a record from command-line values.
///
/// `--admin` / `--moderator` can only force a badge on. An unset flag leaves the
/// decision to the access level, never to an explicit `false`.
pub fn record_from_args(
    first: &str,
    last: &str,
    admin: bool,
    moderator: bool,
    level: Option<u8>,
) -> Result<UserRecord, PresenterError> {
    let mut record = UserRecord::new(first, last);
    if let Some(level) = level {
        debug!("access level {} ({})", level, role_name(level));
        record = record.with_level(level);
    }
    if admin {
        record = record.with_admin(true);
    }
    if moderator {
        record = record.with_moderator(true);
    }
    record.validate()?;
    Ok(record)
}

/// One output line: display name, a tab, then the badges separated by spaces.
pub fn render_line<U, R>(
    user: &U,
    ctx: &R,
    badges: &BadgeConfig,
) -> Result<String, PresenterError>
where
    U: DisplayUser + ?Sized,
    R: RenderContext + ?Sized,
{
    let presenter = UserPresenter::new(user, ctx)
        .with_styles(badges.staff.clone(), badges.moderator.clone());
    let line = format!("{}\t{}", presenter, presenter.badges()?.join(" "));
    debug!(
        "rendered line for {}",
        crate::logutil::escape_log(&presenter.display_name())
    );
    Ok(line)
}

pub fn render_all<R>(
    users: &[UserRecord],
    ctx: &R,
    badges: &BadgeConfig,
) -> Result<Vec<String>, PresenterError>
where
    R: RenderContext + ?Sized,
{
    users
        .iter()
        .map(|user| render_line(user, ctx, badges))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::HtmlRenderer;
    use crate::roles::{LEVEL_MODERATOR, LEVEL_SYSOP, LEVEL_USER};

    #[test]
    fn line_without_badges_has_trailing_tab() {
        let user = UserRecord::new("Jane", "Doe");
        let line = render_line(&user, &HtmlRenderer, &BadgeConfig::default()).unwrap();
        assert_eq!(line, "Jane D.\t");
    }

    #[test]
    fn line_lists_staff_before_mod() {
        let user = UserRecord::new("Ann", "Lee").with_level(LEVEL_SYSOP);
        let line = render_line(&user, &HtmlRenderer, &BadgeConfig::default()).unwrap();
        assert_eq!(
            line,
            "Ann L.\t<span class=\"badge badge-success\">Staff</span> <span class=\"badge badge-primary\">Mod</span>"
        );
    }

    #[test]
    fn args_flags_force_badges_on_top_of_level() {
        let u = record_from_args("Jane", "Doe", true, false, Some(LEVEL_USER)).unwrap();
        assert!(u.is_admin());
        assert!(!u.is_moderator());

        let u = record_from_args("Jane", "Doe", false, true, None).unwrap();
        assert!(!u.is_admin());
        assert!(u.is_moderator());
    }

    #[test]
    fn unset_args_flags_leave_level_in_charge() {
        let u = record_from_args("Jane", "Doe", false, false, Some(LEVEL_SYSOP)).unwrap();
        assert_eq!(u.admin, None);
        assert_eq!(u.moderator, None);
        assert!(u.is_admin() && u.is_moderator());

        let u = record_from_args("Jane", "Doe", false, false, Some(LEVEL_MODERATOR)).unwrap();
        assert!(!u.is_admin() && u.is_moderator());

        let u = record_from_args("Jane", "Doe", false, false, None).unwrap();
        assert!(!u.is_admin() && !u.is_moderator());
    }

    #[test]
    fn args_names_are_validated() {
        let u = record_from_args(" Jane ", " Doe", false, false, None).unwrap();
        assert_eq!(u.first_name, "Jane");
        assert_eq!(u.last_name, "Doe");
        assert!(matches!(
            record_from_args("Jane", "Do\u{0007}e", false, false, None),
            Err(PresenterError::InvalidName { field: "last_name", .. })
        ));
    }
}
