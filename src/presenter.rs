//! # User presenter
//!
//! [`UserPresenter`] wraps a [`DisplayUser`] and a [`RenderContext`] for a single
//! render pass and derives the display strings a view needs:
//!
//! - [`UserPresenter::display_name`] - `"Jane D."`
//! - [`UserPresenter::staff_badge`] - `<span class="badge badge-success">Staff</span>` for admins
//! - [`UserPresenter::mod_badge`] - `<span class="badge badge-primary">Mod</span>` for moderators
//!
//! `Display` yields the same text as `display_name`.
//!
//! ```rust
//! use userbadge::markup::HtmlRenderer;
//! use userbadge::presenter::UserPresenter;
//! use userbadge::user::UserRecord;
//!
//! let user = UserRecord::new("Jane", "Doe").with_admin(true);
//! let presenter = UserPresenter::new(&user, &HtmlRenderer);
//! assert_eq!(presenter.to_string(), "Jane D.");
//! assert!(presenter.staff_badge().unwrap().is_some());
//! assert!(presenter.mod_badge().unwrap().is_none());
//! ```

use std::fmt;

use log::debug;

use crate::badge::BadgeStyle;
use crate::error::PresenterError;
use crate::logutil::escape_log;
use crate::markup::RenderContext;
use crate::user::DisplayUser;

pub struct UserPresenter<'a, U: ?Sized, R: ?Sized> {
    user: &'a U,
    ctx: &'a R,
    staff_style: BadgeStyle,
    moderator_style: BadgeStyle,
}

impl<'a, U, R> UserPresenter<'a, U, R>
where
    U: DisplayUser + ?Sized,
    R: RenderContext + ?Sized,
{
    pub fn new(user: &'a U, ctx: &'a R) -> Self {
        UserPresenter {
            user,
            ctx,
            staff_style: BadgeStyle::staff(),
            moderator_style: BadgeStyle::moderator(),
        }
    }

    /// Replace the default badge styles.
    pub fn with_styles(mut self, staff: BadgeStyle, moderator: BadgeStyle) -> Self {
        self.staff_style = staff;
        self.moderator_style = moderator;
        self
    }

    /// `"{first} {initial}."`, where the initial is the first character of the last name.
    ///
    /// Names are used exactly as given; trimming belongs to input validation. An empty or
    /// blank last name yields the first name alone.
    pub fn display_name(&self) -> String {
        let first = self.user.first_name();
        let last = self.user.last_name();
        match last.chars().next() {
            Some(c) if !last.trim().is_empty() => format!("{} {}.", first, c),
            _ => first.to_string(),
        }
    }

    /// Staff badge markup for admins, `None` otherwise.
    pub fn staff_badge(&self) -> Result<Option<String>, PresenterError> {
        self.badge_if(self.user.is_admin(), &self.staff_style)
    }

    /// Mod badge markup for moderators, `None` otherwise.
    pub fn mod_badge(&self) -> Result<Option<String>, PresenterError> {
        self.badge_if(self.user.is_moderator(), &self.moderator_style)
    }

    /// All applicable badges, staff first.
    pub fn badges(&self) -> Result<Vec<String>, PresenterError> {
        Ok([self.staff_badge()?, self.mod_badge()?]
            .into_iter()
            .flatten()
            .collect())
    }

    fn badge_if(
        &self,
        granted: bool,
        style: &BadgeStyle,
    ) -> Result<Option<String>, PresenterError> {
        if !granted {
            return Ok(None);
        }
        let html = style.render(self.ctx)?;
        debug!(
            "badge {} for {}: {}",
            style.label,
            escape_log(&self.display_name()),
            escape_log(&html)
        );
        Ok(Some(html))
    }
}

impl<U, R> fmt::Display for UserPresenter<'_, U, R>
where
    U: DisplayUser + ?Sized,
    R: RenderContext + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::HtmlRenderer;
    use crate::user::UserRecord;
    use crate::validation::MarkupError;

    fn name_of(first: &str, last: &str) -> String {
        let user = UserRecord::new(first, last);
        UserPresenter::new(&user, &HtmlRenderer).display_name()
    }

    #[test]
    fn display_name_uses_last_initial() {
        assert_eq!(name_of("Jane", "Doe"), "Jane D.");
        assert_eq!(name_of("Łukasz", "Żak"), "Łukasz Ż.");
        assert_eq!(name_of("Jane", "doe"), "Jane d.");
    }

    #[test]
    fn display_name_keeps_names_as_given() {
        assert_eq!(name_of("", "Doe"), " D.");
        assert_eq!(name_of(" Jane", "Doe"), " Jane D.");
        assert_eq!(name_of("Mary Ann ", "Doe"), "Mary Ann  D.");
    }

    #[test]
    fn display_name_empty_parts() {
        assert_eq!(name_of("Jane", ""), "Jane");
        assert_eq!(name_of("Jane", "   "), "Jane");
        assert_eq!(name_of(" Jane ", "\t"), " Jane ");
        assert_eq!(name_of("", ""), "");
    }

    #[test]
    fn custom_styles_are_used() {
        let user = UserRecord::new("Jane", "Doe").with_admin(true);
        let presenter = UserPresenter::new(&user, &HtmlRenderer).with_styles(
            BadgeStyle::new("Admin", ["tag", "is-danger"]),
            BadgeStyle::moderator(),
        );
        assert_eq!(
            presenter.staff_badge().unwrap().as_deref(),
            Some("<span class=\"tag is-danger\">Admin</span>")
        );
    }

    struct Refusing;

    impl RenderContext for Refusing {
        fn content_tag(
            &self,
            tag: &str,
            _text: &str,
            _attrs: &[(&str, &str)],
        ) -> Result<String, MarkupError> {
            Err(MarkupError::InvalidTagName(tag.to_string()))
        }
    }

    #[test]
    fn render_errors_propagate_only_when_badge_applies() {
        let plain = UserRecord::new("Jane", "Doe");
        assert!(UserPresenter::new(&plain, &Refusing).staff_badge().unwrap().is_none());

        let moderator = UserRecord::new("Jane", "Doe").with_moderator(true);
        let err = UserPresenter::new(&moderator, &Refusing).mod_badge().unwrap_err();
        assert!(matches!(err, PresenterError::Markup(MarkupError::InvalidTagName(_))));
    }

    #[test]
    fn works_with_trait_objects() {
        let user = UserRecord::new("Jane", "Doe").with_moderator(true);
        let dyn_user: &dyn DisplayUser = &user;
        let dyn_ctx: &dyn RenderContext = &HtmlRenderer;
        let presenter = UserPresenter::new(dyn_user, dyn_ctx);
        assert_eq!(presenter.badges().unwrap().len(), 1);
    }
}
