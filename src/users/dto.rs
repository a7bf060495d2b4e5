use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::users::model::{User, UserInDB, UserProfile};
use crate::users::validators::{serialize_key, serialize_timestamp};

/// Registration input.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
    #[serde(default)]
    pub repeat_password: Option<String>,
}

/// Edit-profile input. Carries a new password without any confirmation.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEdit {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

/// Standalone password change. Checking `password` against the stored hash
/// and comparing the new passwords is left to the auth collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePassword {
    pub username: String,
    pub password: String,
    pub new_password: String,
    pub repeat_password: String,
}

/// Text-safe output form of a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSerialized {
    pub key: String,
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl UserSerialized {
    pub fn from_user(user: &User) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let created_at = user
            .created_at
            .map(|ts| serialize_timestamp("createdAt", ts))
            .transpose()
            .unwrap_or_else(|e| {
                errors.push(e);
                None
            });
        let updated_at = user
            .updated_at
            .map(|ts| serialize_timestamp("updatedAt", ts))
            .transpose()
            .unwrap_or_else(|e| {
                errors.push(e);
                None
            });
        errors.into_result()?;

        Ok(Self {
            key: serialize_key(&user.key),
            profile: user.profile.clone(),
            created_at,
            updated_at,
        })
    }

    /// Same as [`UserSerialized::from_user`]; the hash is not carried over.
    pub fn from_stored(stored: &UserInDB) -> Result<Self, ValidationErrors> {
        Self::from_user(&stored.user)
    }
}

/// Bearer credential pair. Issuing and verifying tokens happens elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl Token {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".into(),
        }
    }
}
