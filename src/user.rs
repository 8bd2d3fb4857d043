//! The user contract the presenter reads, and a serde-backed record implementing it.

use serde::{Deserialize, Serialize};

use crate::error::PresenterError;
use crate::roles::{is_admin_level, is_moderator_level};
use crate::validation::validate_name_part;

/// Read-only view of a user as needed for display.
pub trait DisplayUser {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn is_admin(&self) -> bool;
    fn is_moderator(&self) -> bool;
}

impl<U: DisplayUser + ?Sized> DisplayUser for &U {
    fn first_name(&self) -> &str {
        (**self).first_name()
    }
    fn last_name(&self) -> &str {
        (**self).last_name()
    }
    fn is_admin(&self) -> bool {
        (**self).is_admin()
    }
    fn is_moderator(&self) -> bool {
        (**self).is_moderator()
    }
}

/// A user record as loaded from JSON.
///
/// Role flags can be given directly (`admin`, `moderator`) or derived from a numeric
/// `access_level`. Explicit flags win over the level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "user_level")]
    pub access_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator: Option<bool>,
}

impl UserRecord {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        UserRecord {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = Some(admin);
        self
    }

    pub fn with_moderator(mut self, moderator: bool) -> Self {
        self.moderator = Some(moderator);
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.access_level = Some(level);
        self
    }

    /// Validate both name parts and store their trimmed forms.
    pub fn validate(&mut self) -> Result<(), PresenterError> {
        self.first_name = validate_name_part(&self.first_name).map_err(|source| {
            PresenterError::InvalidName {
                field: "first_name",
                source,
            }
        })?;
        self.last_name = validate_name_part(&self.last_name).map_err(|source| {
            PresenterError::InvalidName {
                field: "last_name",
                source,
            }
        })?;
        Ok(())
    }
}

impl DisplayUser for UserRecord {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn is_admin(&self) -> bool {
        self.admin
            .unwrap_or_else(|| self.access_level.map(is_admin_level).unwrap_or(false))
    }

    fn is_moderator(&self) -> bool {
        self.moderator
            .unwrap_or_else(|| self.access_level.map(is_moderator_level).unwrap_or(false))
    }
}
