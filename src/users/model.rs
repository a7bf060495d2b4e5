use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Top-level role partition of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Student,
    Staff,
    Parent,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Job title. Only meaningful on staff accounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Designation {
    Tradesman,
    TradeInstructor,
    Demonstrator,
    WorkshopInstructor,
    WorkshopSuperintendent,
    Lecturer,
    HeadOfDepartment,
    Principal,
    Student,
    OfficeStaff,
}

pub const DEFAULT_STATE: &str = "Kerala";

fn default_state() -> Option<String> {
    Some(DEFAULT_STATE.to_string())
}

fn default_disabled() -> Option<bool> {
    Some(false)
}

fn default_gender() -> Option<Gender> {
    Some(Gender::Male)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i64),
    Text(String),
}

/// Accepts a JSON integer or a string holding one. Whether the digits form a
/// valid number is left to the contact-number rule.
fn integer_or_numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrText::deserialize(deserializer)? {
        IntOrText::Int(n) => Ok(n),
        IntOrText::Text(text) => text
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom("value is not a valid integer")),
    }
}

/// Profile fields shared by every user-shaped record.
///
/// Field order is validation order: `account_type` is declared before
/// `designation` so the staff check always sees a decoded account type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default = "default_disabled")]
    pub disabled: Option<bool>,
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "integer_or_numeric_string")]
    pub contact_number: i64,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_state")]
    pub state: Option<String>,
    #[serde(default)]
    pub pin: Option<u32>,
    #[serde(default = "default_gender")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub designation: Option<Designation>,
}

/// Canonical identity record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub key: Uuid,
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(rename = "createdAt", default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(rename = "updatedAt", default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// User record as handed back by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInDB {
    #[serde(flatten)]
    pub user: User,
    #[serde(skip_serializing)]
    pub hashed_password: String, // never leaves the process as JSON
}

impl UserInDB {
    /// Drops the password hash.
    pub fn into_user(self) -> User {
        self.user
    }
}
