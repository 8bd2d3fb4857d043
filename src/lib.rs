//! # userbadge - display names and role badges for user records
//!
//! userbadge is a small presentation layer for web views. It wraps a user record and
//! derives the strings a template needs: a short display name ("Jane D.") and HTML
//! badge snippets for staff and moderators.
//!
//! ## Features
//!
//! - **Framework-free contracts**: [`user::DisplayUser`] for the record, [`markup::RenderContext`] for tag generation.
//! - **Safe default renderer**: [`markup::HtmlRenderer`] escapes text and attribute values and rejects malformed tag names.
//! - **Role levels**: records may carry a numeric access level (User, Moderator, Sysop) instead of explicit flags.
//! - **Configurable badges**: labels and CSS classes come from TOML configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use userbadge::markup::HtmlRenderer;
//! use userbadge::presenter::UserPresenter;
//! use userbadge::user::UserRecord;
//!
//! let user = UserRecord::new("Jane", "Doe").with_moderator(true);
//! let presenter = UserPresenter::new(&user, &HtmlRenderer);
//!
//! assert_eq!(presenter.display_name(), "Jane D.");
//! assert_eq!(
//!     presenter.mod_badge().unwrap().as_deref(),
//!     Some("<span class=\"badge badge-primary\">Mod</span>")
//! );
//! ```
//!
//! ## Module Organization
//!
//! - [`presenter`] - the user presenter
//! - [`user`] - user contract and JSON record
//! - [`markup`] - render context contract and HTML renderer
//! - [`badge`] - badge labels and classes
//! - [`roles`] - numeric access levels
//! - [`render`] - batch rendering of JSON user records
//! - [`config`] - configuration loading
//! - [`validation`] - name and identifier validation

pub mod badge;
pub mod config;
pub mod error;
pub mod logutil;
pub mod markup;
pub mod presenter;
pub mod render;
pub mod roles;
pub mod user;
pub mod validation;

pub use error::PresenterError;
pub use markup::{HtmlRenderer, RenderContext};
pub use presenter::UserPresenter;
pub use user::{DisplayUser, UserRecord};
