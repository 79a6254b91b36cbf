//! Profile records stored in the `users` table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a user does on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Sender,
    Receiver,
    Pickup,
    Messenger,
}

impl UserRole {
    pub const ALL: &'static [UserRole] = &[
        UserRole::Sender,
        UserRole::Receiver,
        UserRole::Pickup,
        UserRole::Messenger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Sender => "sender",
            UserRole::Receiver => "receiver",
            UserRole::Pickup => "pickup",
            UserRole::Messenger => "messenger",
        }
    }

    /// Label key shown on the registration form
    pub fn label_key(self) -> mbet_adera_i18n::Key {
        use mbet_adera_i18n::Key;

        match self {
            UserRole::Sender => Key::RegisterRolesSender,
            UserRole::Receiver => Key::RegisterRolesReceiver,
            UserRole::Pickup => Key::RegisterRolesPickup,
            UserRole::Messenger => Key::RegisterRolesMessenger,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's profile row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields collected by the registration form
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetails {
    pub full_name: String,
    pub phone_number: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
}

impl ProfileDetails {
    pub fn new(full_name: &str, phone_number: &str, role: UserRole) -> Self {
        Self {
            full_name: full_name.to_string(),
            phone_number: phone_number.to_string(),
            role,
            avatar_url: None,
        }
    }

    /// Bind the details to a freshly issued identity
    pub fn into_new_profile(self, id: &str, email: &str) -> NewProfile {
        NewProfile {
            id: id.to_string(),
            email: email.to_string(),
            full_name: self.full_name,
            phone_number: self.phone_number,
            role: self.role,
            avatar_url: self.avatar_url,
        }
    }
}

/// Row inserted at sign-up. `created_at` is assigned by the database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_row_deserializes() {
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "id": "user-1",
            "email": "a@b.com",
            "full_name": "Abebe Kebede",
            "phone_number": "+251911111111",
            "role": "pickup",
            "avatar_url": null,
            "created_at": "2024-03-01T08:30:00+00:00"
        }))
        .unwrap();

        assert_eq!(profile.role, UserRole::Pickup);
        assert_eq!(profile.avatar_url, None);
    }

    #[test]
    fn test_new_profile_omits_missing_avatar() {
        let row = ProfileDetails::new("X", "+251911111111", UserRole::Sender)
            .into_new_profile("user-1", "a@b.com");

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["role"], "sender");
        assert_eq!(value["email"], "a@b.com");
        assert!(value.get("avatar_url").is_none());
    }
}
