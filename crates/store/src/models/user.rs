//! Platform user accounts.

use capra_core::UserId;
use serde::{Deserialize, Serialize};

/// Avatar glyph assigned to accounts created through the admin panel.
const DEFAULT_AVATAR: &str = "👤";

/// A platform user.
///
/// `email` is stored exactly as entered: registration rejects blank fields
/// only and performs no format validation. The login flow is the stricter
/// tier (see [`capra_core::Email`]); the two are intentionally distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email, stored as entered.
    pub email: String,
    /// Display glyph.
    pub avatar: String,
}

/// Input for creating a user through the admin panel.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    /// Display name (required).
    pub name: String,
    /// Contact email (required, not format-checked).
    pub email: String,
}

impl NewUser {
    /// Whether any field is empty or whitespace-only.
    #[must_use]
    pub fn has_blank_field(&self) -> bool {
        self.name.trim().is_empty() || self.email.trim().is_empty()
    }
}

impl User {
    /// Build a user record from validated registration input.
    ///
    /// Assigns a fresh clock-derived id and the default avatar.
    pub(crate) fn register(new: NewUser) -> Self {
        Self {
            id: UserId::generate(),
            name: new.name,
            email: new.email,
            avatar: DEFAULT_AVATAR.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_field_detection() {
        let input = NewUser {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
        };
        assert!(!input.has_blank_field());

        let blank_name = NewUser {
            name: " ".to_owned(),
            email: "ana@example.com".to_owned(),
        };
        assert!(blank_name.has_blank_field());

        let blank_email = NewUser {
            name: "Ana".to_owned(),
            email: String::new(),
        };
        assert!(blank_email.has_blank_field());
    }

    #[test]
    fn test_register_defaults_avatar() {
        let user = User::register(NewUser {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
        });
        assert_eq!(user.avatar, "👤");
    }

    #[test]
    fn test_email_format_is_not_checked() {
        // Registration accepts shapes the login flow would reject.
        let user = User::register(NewUser {
            name: "Ana".to_owned(),
            email: "not-an-email".to_owned(),
        });
        assert_eq!(user.email, "not-an-email");
    }
}
