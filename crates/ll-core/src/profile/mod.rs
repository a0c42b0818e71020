//! User profile domain.
//!
//! The profile is persisted as a single JSON document under
//! [`crate::storage_keys::USER_DATA`]. The wire names are the legacy
//! camelCase keys written by earlier releases of the client.

mod form;
mod initials;
mod validation;

pub use form::ProfileForm;
pub use initials::initials;
pub use validation::{is_complete, validate_email, validate_name, ProfileField, ValidationErrors};

use serde::{Deserialize, Deserializer, Serialize};

/// User profile.
///
/// `first_name` and `email` are required by the schema; every other field may
/// be absent. The profile is "complete" once both required fields pass their
/// validators, see [`is_complete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone_number: Option<String>,
    /// Opaque reference to an image picked by the user. Never dereferenced here.
    #[serde(
        rename = "avatar",
        alias = "avatarUri",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub avatar_uri: Option<String>,
    #[serde(
        rename = "emailNotifications",
        alias = "emailNotificationsEnabled",
        default,
        deserialize_with = "null_as_false"
    )]
    pub email_notifications_enabled: bool,
}

impl Profile {
    /// Profile as captured by the onboarding form.
    pub fn new(first_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        is_complete(self)
    }

    /// Display initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        initials(&self.first_name, self.last_name.as_deref())
    }

    /// Decode the stored document, checking it against the schema.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Outcome of reading the persisted profile.
///
/// A stored document that fails to decode is reported as [`ProfileLoad::Corrupt`]
/// rather than as an error: callers fall back to an empty profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLoad {
    Found(Profile),
    Missing,
    Corrupt { reason: String },
}

impl ProfileLoad {
    /// Classify a raw value read from the store.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => ProfileLoad::Missing,
            Some(raw) => match Profile::from_json(raw) {
                Ok(profile) => ProfileLoad::Found(profile),
                Err(e) => ProfileLoad::Corrupt {
                    reason: e.to_string(),
                },
            },
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, ProfileLoad::Corrupt { .. })
    }

    /// The stored profile, or an empty one when nothing usable was stored.
    pub fn into_profile(self) -> Profile {
        match self {
            ProfileLoad::Found(profile) => profile,
            ProfileLoad::Missing | ProfileLoad::Corrupt { .. } => Profile::default(),
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> Profile {
        Profile {
            first_name: "Jane".to_string(),
            last_name: Some("Doe".to_string()),
            email: "jane@example.com".to_string(),
            phone_number: Some("555-0100".to_string()),
            avatar_uri: Some("file:///photos/jane.jpg".to_string()),
            email_notifications_enabled: true,
        }
    }

    #[test]
    fn serializes_with_legacy_field_names() {
        let json: serde_json::Value =
            serde_json::from_str(&full_profile().to_json().unwrap()).unwrap();

        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["phoneNumber"], "555-0100");
        assert_eq!(json["avatar"], "file:///photos/jane.jpg");
        assert_eq!(json["emailNotifications"], true);
    }

    #[test]
    fn decodes_onboarding_document_with_only_required_fields() {
        let profile = Profile::from_json(r#"{"firstName":"Jane","email":"jane@example.com"}"#)
            .unwrap();

        assert_eq!(profile, Profile::new("Jane", "jane@example.com"));
        assert!(!profile.email_notifications_enabled);
    }

    #[test]
    fn decodes_blank_optionals_and_null_flags_as_absent() {
        let raw = r#"{
            "firstName": "Jane",
            "lastName": "",
            "email": "jane@example.com",
            "phoneNumber": "",
            "avatar": null,
            "emailNotifications": null
        }"#;

        let profile = Profile::from_json(raw).unwrap();

        assert_eq!(profile.last_name, None);
        assert_eq!(profile.phone_number, None);
        assert_eq!(profile.avatar_uri, None);
        assert!(!profile.email_notifications_enabled);
    }

    #[test]
    fn accepts_long_field_name_aliases() {
        let raw = r#"{"firstName":"Jane","email":"j@x.io","avatarUri":"a.png","emailNotificationsEnabled":true}"#;

        let profile = Profile::from_json(raw).unwrap();

        assert_eq!(profile.avatar_uri.as_deref(), Some("a.png"));
        assert!(profile.email_notifications_enabled);
    }

    #[test]
    fn load_classifies_stored_values() {
        assert_eq!(ProfileLoad::from_stored(None), ProfileLoad::Missing);

        let stored = full_profile().to_json().unwrap();
        assert_eq!(
            ProfileLoad::from_stored(Some(&stored)),
            ProfileLoad::Found(full_profile())
        );

        let corrupt = ProfileLoad::from_stored(Some("{not json"));
        assert!(corrupt.is_corrupt());
        assert_eq!(corrupt.into_profile(), Profile::default());
    }

    #[test]
    fn missing_required_field_is_corrupt() {
        let load = ProfileLoad::from_stored(Some(r#"{"firstName":"Jane"}"#));

        assert!(load.is_corrupt());
    }

    #[test]
    fn wrong_field_type_is_corrupt() {
        let load = ProfileLoad::from_stored(Some(r#"{"firstName":42,"email":"a@b.co"}"#));

        assert!(load.is_corrupt());
    }
}
