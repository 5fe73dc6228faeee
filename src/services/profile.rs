use crate::api::ProfileApi;
use crate::domain::profile::{ProfileBundle, ProfileRecord, ProfileUpdate};
use crate::forms::profile::{ProfileForm, ProfileLimits};
use crate::services::{ServiceError, ServiceResult};

/// Fetches the signed-in user's profile and activity stream.
pub async fn load_profile<A>(api: &A) -> ServiceResult<ProfileBundle>
where
    A: ProfileApi + ?Sized,
{
    let bundle = api.get_profile().await.map_err(|err| {
        log::error!("failed to load profile: {err}");
        err
    })?;
    Ok(bundle)
}

/// Pre-fills the edit form from a loaded profile.
pub fn form_from_record(record: &ProfileRecord) -> ProfileForm {
    ProfileForm {
        name: record.username.clone(),
        title: record.title.clone(),
        email: record.email.clone(),
        bio: record.bio.clone(),
        skills: record.skills.clone(),
        languages: record.languages.clone(),
        location: record.location.clone(),
        phone: record.phone.clone(),
        image: None,
    }
}

/// Validates the form and, when clean, persists the update.
///
/// A validation failure aborts before any network traffic and carries every
/// field message at once. On success the caller navigates back to the
/// profile view with the returned record.
pub async fn save_profile<A>(
    api: &A,
    form: &ProfileForm,
    limits: &ProfileLimits,
) -> ServiceResult<ProfileRecord>
where
    A: ProfileApi + ?Sized,
{
    let errors = form.validate(limits);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let update = ProfileUpdate::from(form);
    let record = api.update_profile(&update).await.map_err(|err| {
        log::error!("failed to update profile: {err}");
        err
    })?;
    Ok(record)
}
