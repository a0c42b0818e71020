use super::validation::{validate_email, validate_name, ProfileField, ValidationErrors};
use super::{initials, Profile};

/// Editable state of the profile screen.
///
/// Holds raw text as typed. Validation is recomputed from the current text on
/// every query, so the flags can never go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    avatar_uri: Option<String>,
    email_notifications_enabled: bool,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone().unwrap_or_default(),
            email: profile.email.clone(),
            phone_number: profile.phone_number.clone().unwrap_or_default(),
            avatar_uri: profile.avatar_uri.clone(),
            email_notifications_enabled: profile.email_notifications_enabled,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn avatar_uri(&self) -> Option<&str> {
        self.avatar_uri.as_deref()
    }

    pub fn email_notifications_enabled(&self) -> bool {
        self.email_notifications_enabled
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_phone_number(&mut self, value: impl Into<String>) {
        self.phone_number = value.into();
    }

    /// Result of the image picker. `None` means the pick was cancelled and
    /// the current avatar is kept.
    pub fn pick_avatar(&mut self, picked: Option<String>) {
        if let Some(uri) = picked {
            self.avatar_uri = Some(uri);
        }
    }

    pub fn remove_avatar(&mut self) {
        self.avatar_uri = None;
    }

    pub fn set_email_notifications(&mut self, enabled: bool) {
        self.email_notifications_enabled = enabled;
    }

    /// Whether the field currently holds a valid value. An empty last name is valid.
    pub fn is_valid(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::FirstName => validate_name(&self.first_name),
            ProfileField::LastName => self.last_name.is_empty() || validate_name(&self.last_name),
            ProfileField::Email => validate_email(&self.email),
        }
    }

    /// Inline error for a field: only for non-empty input that fails its validator.
    pub fn field_error(&self, field: ProfileField) -> Option<&'static str> {
        let text = match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
        };

        (!text.is_empty() && !self.is_valid(field)).then(|| field.error_message())
    }

    pub fn can_save(&self) -> bool {
        [ProfileField::FirstName, ProfileField::LastName, ProfileField::Email]
            .into_iter()
            .all(|field| self.is_valid(field))
    }

    /// Avatar placeholder text, derived from the names as currently typed.
    pub fn initials(&self) -> String {
        initials(&self.first_name, Some(self.last_name.as_str()))
    }

    /// Build the profile to persist.
    pub fn to_profile(&self) -> Result<Profile, ValidationErrors> {
        let invalid: Vec<ProfileField> =
            [ProfileField::FirstName, ProfileField::LastName, ProfileField::Email]
                .into_iter()
                .filter(|field| !self.is_valid(*field))
                .collect();
        if !invalid.is_empty() {
            return Err(ValidationErrors::new(invalid));
        }

        Ok(Profile {
            first_name: self.first_name.clone(),
            last_name: non_blank(&self.last_name),
            email: self.email.clone(),
            phone_number: non_blank(self.phone_number.trim()),
            avatar_uri: self.avatar_uri.clone(),
            email_notifications_enabled: self.email_notifications_enabled,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
