use crate::profile::{validate_email, validate_name, Profile, ProfileField};

/// First-run form state: first name and email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    first_name: String,
    email: String,
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Keystroke in the first name field. Returns the new validity.
    pub fn set_first_name(&mut self, value: impl Into<String>) -> bool {
        self.first_name = value.into();
        self.is_valid_name()
    }

    /// Keystroke in the email field. Returns the new validity.
    pub fn set_email(&mut self, value: impl Into<String>) -> bool {
        self.email = value.into();
        self.is_valid_email()
    }

    pub fn is_valid_name(&self) -> bool {
        validate_name(&self.first_name)
    }

    pub fn is_valid_email(&self) -> bool {
        validate_email(&self.email)
    }

    pub fn first_name_error(&self) -> Option<&'static str> {
        (!self.first_name.is_empty() && !self.is_valid_name())
            .then(|| ProfileField::FirstName.error_message())
    }

    pub fn email_error(&self) -> Option<&'static str> {
        (!self.email.is_empty() && !self.is_valid_email())
            .then(|| ProfileField::Email.error_message())
    }

    /// Submit is enabled only when both fields are valid.
    pub fn can_submit(&self) -> bool {
        self.is_valid_name() && self.is_valid_email()
    }

    pub fn to_profile(&self) -> Profile {
        Profile::new(self.first_name.clone(), self.email.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_form_cannot_submit_and_shows_no_errors() {
        let form = OnboardingForm::new();

        assert!(!form.can_submit());
        assert_eq!(form.first_name_error(), None);
        assert_eq!(form.email_error(), None);
    }

    #[test]
    fn typing_updates_validity_per_keystroke() {
        let mut form = OnboardingForm::new();

        assert!(form.set_first_name("J"));
        assert!(!form.set_first_name("J4"));
        assert_eq!(
            form.first_name_error(),
            Some("First name must contain only letters.")
        );
        assert!(form.set_first_name("Jane"));
        assert_eq!(form.first_name_error(), None);

        assert!(!form.set_email("jane@"));
        assert_eq!(form.email_error(), Some("Enter a valid email address."));
        assert!(form.set_email("jane@example.com"));

        assert!(form.can_submit());
        assert!(form.to_profile().is_complete());
    }

    #[test]
    fn profile_carries_only_onboarding_fields() {
        let mut form = OnboardingForm::new();
        form.set_first_name("Jane");
        form.set_email("jane@example.com");

        assert_eq!(form.to_profile(), Profile::new("Jane", "jane@example.com"));
    }
}
