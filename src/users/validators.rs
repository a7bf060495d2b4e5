use lazy_static::lazy_static;
use regex::Regex;
use time::{format_description::well_known::Rfc3339, OffsetDateTime, UtcOffset};
use url::{Host, Url};
use uuid::Uuid;

use crate::error::{FieldError, ValidationErrors};
use crate::users::dto::{ChangePassword, Token, UserCreate, UserEdit, UserSerialized};
use crate::users::model::{AccountType, Designation, User, UserInDB, UserProfile};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref CONTACT_NUMBER_RE: Regex = Regex::new(r"^[6-9][0-9]{9}$").unwrap();
    static ref TLD_RE: Regex = Regex::new(r"(?i)^[^.]+(\.[^.]+)*\.[a-z]{2,63}\.?$").unwrap();
}

const MAX_URL_LENGTH: usize = 2083;

/// Record-level validation run after the document has been decoded.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

pub fn check_key(key: &Uuid) -> Result<(), FieldError> {
    if key.get_version_num() != 4 {
        return Err(FieldError::new("key", "must be a version 4 UUID"));
    }
    Ok(())
}

pub fn check_username(username: &str) -> Result<(), FieldError> {
    if username.is_empty() || !username.chars().all(char::is_alphanumeric) {
        return Err(FieldError::new("username", "must be alphanumeric"));
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), FieldError> {
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::new("email", "value is not a valid email address"));
    }
    Ok(())
}

/// Ten digits, leading digit 6-9. No normalization.
pub fn check_contact_number(contact_number: i64) -> Result<(), FieldError> {
    if !CONTACT_NUMBER_RE.is_match(&contact_number.to_string()) {
        return Err(FieldError::new("contact_number", "Contact number is invalid"));
    }
    Ok(())
}

/// http(s) URL with a host that is an IP address or a domain ending in a
/// top-level domain.
pub fn check_avatar(avatar: &str) -> Result<(), FieldError> {
    if avatar.chars().count() > MAX_URL_LENGTH {
        return Err(FieldError::new(
            "avatar",
            format!("ensure this value has at most {MAX_URL_LENGTH} characters"),
        ));
    }
    let url = Url::parse(avatar)
        .map_err(|_| FieldError::new("avatar", "invalid or missing URL scheme"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FieldError::new("avatar", "URL scheme not permitted"));
    }
    match url.host() {
        Some(Host::Domain(domain)) if TLD_RE.is_match(domain) => Ok(()),
        Some(Host::Domain(_)) => Err(FieldError::new(
            "avatar",
            "URL host invalid, top level domain required",
        )),
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => Ok(()),
        None => Err(FieldError::new("avatar", "URL host invalid")),
    }
}

pub fn check_designation(
    account_type: AccountType,
    designation: Option<Designation>,
) -> Result<(), FieldError> {
    if designation.is_some() && account_type != AccountType::Staff {
        return Err(FieldError::new(
            "designation",
            "Cannot select designation unless account type is staff",
        ));
    }
    Ok(())
}

/// A missing confirmation counts as a mismatch.
pub fn check_passwords_match(
    password: &str,
    repeat_password: Option<&str>,
) -> Result<(), FieldError> {
    if repeat_password != Some(password) {
        return Err(FieldError::new("repeat_password", "passwords do not match"));
    }
    Ok(())
}

/// Lowercase hex, no dashes.
pub fn serialize_key(key: &Uuid) -> String {
    key.simple().to_string()
}

/// RFC 3339 text of the same instant. Offsets with a seconds component have
/// no RFC 3339 spelling and are rendered in UTC instead.
pub fn serialize_timestamp(field: &'static str, ts: OffsetDateTime) -> Result<String, FieldError> {
    let ts = if ts.offset().seconds_past_minute() != 0 {
        ts.to_offset(UtcOffset::UTC)
    } else {
        ts
    };
    ts.format(&Rfc3339)
        .map_err(|e| FieldError::new(field, format!("timestamp cannot be rendered: {e}")))
}

fn collect(errors: &mut ValidationErrors, result: Result<(), FieldError>) {
    if let Err(e) = result {
        errors.push(e);
    }
}

impl UserProfile {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        collect(errors, check_username(&self.username));
        collect(errors, check_email(&self.email));
        collect(errors, check_contact_number(self.contact_number));
        if let Some(avatar) = &self.avatar {
            collect(errors, check_avatar(avatar));
        }
        collect(errors, check_designation(self.account_type, self.designation));
    }
}

impl User {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        collect(errors, check_key(&self.key));
        self.profile.collect_errors(errors);
    }
}

impl Validate for UserProfile {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        self.collect_errors(&mut errors);
        errors.into_result()
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        self.collect_errors(&mut errors);
        errors.into_result()
    }
}

impl Validate for UserInDB {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.user.validate()
    }
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        self.user.collect_errors(&mut errors);
        collect(
            &mut errors,
            check_passwords_match(&self.password, self.repeat_password.as_deref()),
        );
        errors.into_result()
    }
}

impl Validate for UserEdit {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.user.validate()
    }
}

impl Validate for UserSerialized {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.profile.validate()
    }
}

impl Validate for ChangePassword {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

impl Validate for Token {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}
