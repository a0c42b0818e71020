//! Profile screen session
//!
//! Wraps a [`ProfileForm`] with the load and save use cases. The form is
//! refilled from the store every time the screen becomes active, and can be
//! reset to the last persisted profile.

use std::sync::Arc;

use ll_core::ports::{ProfileRepositoryPort, StoreError};
use ll_core::profile::{Profile, ProfileForm, ProfileLoad};
use tracing::warn;

use crate::usecases::{LoadProfile, ProfileError, SaveProfile};

pub struct ProfileEditor {
    load: LoadProfile,
    save: SaveProfile,
    persisted: Profile,
    form: ProfileForm,
}

impl ProfileEditor {
    pub fn new(profiles: Arc<dyn ProfileRepositoryPort>) -> Self {
        Self {
            load: LoadProfile::new(profiles.clone()),
            save: SaveProfile::new(profiles),
            persisted: Profile::default(),
            form: ProfileForm::default(),
        }
    }

    /// Reload the persisted profile into the form, dropping unsaved edits.
    ///
    /// Returns the raw load outcome so the caller can tell a missing profile
    /// from one that no longer decodes. Both leave an empty form.
    pub async fn activate(&mut self) -> Result<ProfileLoad, StoreError> {
        let load = self.load.execute().await?;
        if load.is_corrupt() {
            warn!("profile screen opened with unreadable stored profile");
        }

        self.persisted = load.clone().into_profile();
        self.form = ProfileForm::from_profile(&self.persisted);
        Ok(load)
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    /// Last profile read from or written to the store.
    pub fn persisted(&self) -> &Profile {
        &self.persisted
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.form != ProfileForm::from_profile(&self.persisted)
    }

    /// Reset the form to the last persisted profile.
    pub fn discard_changes(&mut self) {
        self.form = ProfileForm::from_profile(&self.persisted);
    }

    /// Validate the form and persist it as one profile document.
    ///
    /// On failure the form keeps the user's edits and nothing is assumed saved.
    pub async fn save(&mut self) -> Result<&Profile, ProfileError> {
        let profile = self.form.to_profile()?;
        self.save.execute(&profile).await?;
        self.form = ProfileForm::from_profile(&profile);
        self.persisted = profile;
        Ok(&self.persisted)
    }
}
