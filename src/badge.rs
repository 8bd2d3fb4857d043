//! Badge styles: the label and CSS classes of a role marker.

use serde::{Deserialize, Serialize};

use crate::markup::RenderContext;
use crate::validation::MarkupError;

/// Element every badge is rendered as.
pub const BADGE_TAG: &str = "span";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeStyle {
    pub label: String,
    #[serde(default)]
    pub classes: Vec<String>,
}

impl BadgeStyle {
    pub fn new<I, S>(label: impl Into<String>, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BadgeStyle {
            label: label.into(),
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// `Staff`, shown for admins.
    pub fn staff() -> Self {
        BadgeStyle::new("Staff", ["badge", "badge-success"])
    }

    /// `Mod`, shown for moderators.
    pub fn moderator() -> Self {
        BadgeStyle::new("Mod", ["badge", "badge-primary"])
    }

    /// Classes joined by single spaces, skipping blanks.
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render as `<span class="...">label</span>` through the given context.
    ///
    /// The `class` attribute is omitted when there are no classes.
    pub fn render<R: RenderContext + ?Sized>(&self, ctx: &R) -> Result<String, MarkupError> {
        let class_attr = self.class_attr();
        if class_attr.is_empty() {
            ctx.content_tag(BADGE_TAG, &self.label, &[])
        } else {
            ctx.content_tag(BADGE_TAG, &self.label, &[("class", &class_attr)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::HtmlRenderer;

    #[test]
    fn default_styles() {
        assert_eq!(BadgeStyle::staff().class_attr(), "badge badge-success");
        assert_eq!(BadgeStyle::moderator().class_attr(), "badge badge-primary");
        assert_eq!(BadgeStyle::staff().label, "Staff");
        assert_eq!(BadgeStyle::moderator().label, "Mod");
    }

    #[test]
    fn renders_through_context() {
        let html = BadgeStyle::staff().render(&HtmlRenderer).unwrap();
        assert_eq!(html, "<span class=\"badge badge-success\">Staff</span>");
    }

    #[test]
    fn blank_classes_are_dropped() {
        let style = BadgeStyle::new("VIP", ["", "  ", "badge"]);
        assert_eq!(style.class_attr(), "badge");

        let bare = BadgeStyle::new("VIP", Vec::<String>::new());
        assert_eq!(bare.render(&HtmlRenderer).unwrap(), "<span>VIP</span>");
    }
}
