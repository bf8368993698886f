//! User entity representing a registered account in the House Hunter system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a user in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A tenant looking for housing
    Tenant,
    /// An owner renting out housing
    Owner,
}

/// Partial profile update over the whitelisted field set.
///
/// Only the fields present here may be overwritten through the profile
/// endpoint; `None` leaves the stored value untouched. Note that `email`
/// doubles as the loose back-reference key on listings and bookings, so
/// changing it does not rewrite those references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub gender: Option<String>,
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, unique and case-sensitive as stored
    pub email: String,

    /// Bcrypt hash of the password; never serialized to clients
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Marketplace role (tenant or owner)
    pub role: UserRole,

    /// Postal address
    pub address: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Profile photo URL
    pub photo: Option<String>,

    /// Self-described gender
    pub gender: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with an empty profile
    pub fn new(name: String, email: String, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role,
            address: None,
            phone: None,
            photo: None,
            gender: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial profile update, overwriting only supplied fields
    pub fn apply_patch(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(photo) = patch.photo {
            self.photo = Some(photo);
        }
        if let Some(gender) = patch.gender {
            self.gender = Some(gender);
        }
        self.updated_at = Utc::now();
    }

    /// Checks if the user is an owner
    pub fn is_owner(&self) -> bool {
        self.role == UserRole::Owner
    }

    /// Checks if the user is a tenant
    pub fn is_tenant(&self) -> bool {
        self.role == UserRole::Tenant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "Jane".to_string(),
            "jane@x.com".to_string(),
            "$2b$10$hash".to_string(),
            UserRole::Tenant,
        )
    }

    #[test]
    fn test_new_user_creation() {
        let user = sample_user();

        assert_eq!(user.email, "jane@x.com");
        assert_eq!(user.role, UserRole::Tenant);
        assert!(user.is_tenant());
        assert!(!user.is_owner());
        assert!(user.address.is_none());
        assert!(user.photo.is_none());
    }

    #[test]
    fn test_apply_patch_overwrites_only_supplied_fields() {
        let mut user = sample_user();
        user.address = Some("Old Street 1".to_string());

        user.apply_patch(ProfilePatch {
            name: Some("Jane Doe".to_string()),
            phone: Some("+880123".to_string()),
            ..Default::default()
        });

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.phone.as_deref(), Some("+880123"));
        // untouched fields survive
        assert_eq!(user.email, "jane@x.com");
        assert_eq!(user.address.as_deref(), Some("Old Street 1"));
    }

    #[test]
    fn test_patch_may_change_email() {
        let mut user = sample_user();
        user.apply_patch(ProfilePatch {
            email: Some("new@x.com".to_string()),
            ..Default::default()
        });
        assert_eq!(user.email, "new@x.com");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::Tenant).unwrap(), "\"tenant\"");
        assert_eq!(serde_json::to_string(&UserRole::Owner).unwrap(), "\"owner\"");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$10$hash"));
    }
}
