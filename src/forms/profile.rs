//! Profile edit form and its field-level validation rules.

use phonenumber::parse;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::domain::profile::ProfileUpdate;
use crate::forms::FieldErrors;

/// Fields of the profile edit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Title,
    Email,
    Bio,
    Skills,
    Languages,
    Location,
    Phone,
    Image,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::Name,
        ProfileField::Title,
        ProfileField::Email,
        ProfileField::Bio,
        ProfileField::Skills,
        ProfileField::Languages,
        ProfileField::Location,
        ProfileField::Phone,
        ProfileField::Image,
    ];

    /// Form field name, used as the key of the error map.
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Title => "title",
            ProfileField::Email => "email",
            ProfileField::Bio => "bio",
            ProfileField::Skills => "skills",
            ProfileField::Languages => "languages",
            ProfileField::Location => "location",
            ProfileField::Phone => "phone",
            ProfileField::Image => "image",
        }
    }
}

/// Configured validation limits; the richer profile variant allows a 500
/// character bio, the simpler one 300.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileLimits {
    pub bio_max_len: usize,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self { bio_max_len: 500 }
    }
}

/// A selected avatar file, identified by name and MIME type.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
}

/// Editable profile fields as entered by the user.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub title: String,
    pub email: String,
    pub bio: String,
    /// Comma-separated skill list.
    pub skills: String,
    /// Comma-separated language list.
    pub languages: String,
    pub location: String,
    pub phone: String,
    #[serde(default)]
    pub image: Option<ImageAttachment>,
}

impl ProfileForm {
    /// Validates one field, returning its error message if any. Rules are
    /// evaluated independently per field.
    pub fn validate_field(&self, field: ProfileField, limits: &ProfileLimits) -> Option<String> {
        match field {
            ProfileField::Name => {
                let name = self.name.trim();
                if name.is_empty() {
                    Some("Name is required.".to_string())
                } else if name.chars().count() < 3 {
                    Some("At least 3 characters.".to_string())
                } else {
                    None
                }
            }
            ProfileField::Title => required(&self.title, "Title is required."),
            ProfileField::Email => {
                let email = self.email.trim();
                if email.is_empty() {
                    Some("Email is required.".to_string())
                } else if !email.validate_email() {
                    Some("Invalid email.".to_string())
                } else {
                    None
                }
            }
            ProfileField::Bio => (self.bio.chars().count() > limits.bio_max_len)
                .then(|| format!("Max {} characters.", limits.bio_max_len)),
            ProfileField::Skills => {
                (!csv_has_entry(&self.skills)).then(|| "At least 1 skill.".to_string())
            }
            ProfileField::Languages => {
                (!csv_has_entry(&self.languages)).then(|| "At least 1 language.".to_string())
            }
            ProfileField::Location => required(&self.location, "Location is required."),
            ProfileField::Phone => {
                let phone = self.phone.trim();
                (!phone.is_empty() && !looks_like_phone(phone))
                    .then(|| "Invalid phone number.".to_string())
            }
            ProfileField::Image => self
                .image
                .as_ref()
                .filter(|image| !image.content_type.starts_with("image/"))
                .map(|_| "Must be an image file.".to_string()),
        }
    }

    /// Validates every field at once, gating submission: a non-empty map
    /// means the form must not be sent, and all messages are surfaced
    /// simultaneously.
    pub fn validate(&self, limits: &ProfileLimits) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in ProfileField::ALL {
            if let Some(message) = self.validate_field(field, limits) {
                errors.insert(field.as_str(), message);
            }
        }
        errors
    }
}

impl From<&ProfileForm> for ProfileUpdate {
    /// Extracts the subset the update endpoint persists.
    fn from(form: &ProfileForm) -> Self {
        ProfileUpdate {
            title: form.title.trim().to_string(),
            bio: form.bio.clone(),
            skills: form.skills.trim().to_string(),
            location: form.location.trim().to_string(),
            phone: form.phone.trim().to_string(),
            languages: form.languages.trim().to_string(),
        }
    }
}

fn required(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_string())
}

/// At least one non-blank entry in a comma-separated list.
fn csv_has_entry(value: &str) -> bool {
    value.split(',').any(|entry| !entry.trim().is_empty())
}

/// International-phone-like shape: parseable as an international number, or
/// a bare 7-15 digit national number with common separators.
fn looks_like_phone(value: &str) -> bool {
    if parse(None, value).is_ok() {
        return true;
    }
    let digits: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();
    let digits = digits.strip_prefix('+').unwrap_or(&digits);
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A form that passes every rule.
    fn valid_form() -> ProfileForm {
        ProfileForm {
            name: "Madhan".to_string(),
            title: "Engineer".to_string(),
            email: "a@b.co".to_string(),
            bio: "Builds things.".to_string(),
            skills: "go, rust".to_string(),
            languages: "English".to_string(),
            location: "Chennai".to_string(),
            phone: String::new(),
            image: None,
        }
    }

    fn limits() -> ProfileLimits {
        ProfileLimits::default()
    }

    #[test]
    fn valid_form_produces_no_errors() {
        assert!(valid_form().validate(&limits()).is_empty());
    }

    #[test]
    fn email_shape_is_enforced() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert!(
            form.validate_field(ProfileField::Email, &limits())
                .is_some()
        );

        form.email = "a@b.co".to_string();
        assert!(
            form.validate_field(ProfileField::Email, &limits())
                .is_none()
        );
    }

    #[test]
    fn name_requires_three_characters() {
        let mut form = valid_form();
        form.name = "ab".to_string();
        assert_eq!(
            form.validate_field(ProfileField::Name, &limits()).as_deref(),
            Some("At least 3 characters.")
        );
        form.name = String::new();
        assert_eq!(
            form.validate_field(ProfileField::Name, &limits()).as_deref(),
            Some("Name is required.")
        );
    }

    #[test]
    fn bio_limit_is_configurable() {
        let mut form = valid_form();
        form.bio = "x".repeat(501);
        assert!(form.validate_field(ProfileField::Bio, &limits()).is_some());

        form.bio = "x".repeat(500);
        assert!(form.validate_field(ProfileField::Bio, &limits()).is_none());

        let short = ProfileLimits { bio_max_len: 300 };
        form.bio = "x".repeat(301);
        assert_eq!(
            form.validate_field(ProfileField::Bio, &short).as_deref(),
            Some("Max 300 characters.")
        );
    }

    #[test]
    fn skills_need_one_non_blank_entry() {
        let mut form = valid_form();
        form.skills = String::new();
        assert!(
            form.validate_field(ProfileField::Skills, &limits())
                .is_some()
        );
        form.skills = " , ,".to_string();
        assert!(
            form.validate_field(ProfileField::Skills, &limits())
                .is_some()
        );
        form.skills = "go, rust".to_string();
        assert!(
            form.validate_field(ProfileField::Skills, &limits())
                .is_none()
        );
    }

    #[test]
    fn optional_phone_must_look_international() {
        let mut form = valid_form();
        assert!(form.validate_field(ProfileField::Phone, &limits()).is_none());

        form.phone = "+91 98765 43210".to_string();
        assert!(form.validate_field(ProfileField::Phone, &limits()).is_none());

        form.phone = "not a phone".to_string();
        assert!(form.validate_field(ProfileField::Phone, &limits()).is_some());
    }

    #[test]
    fn image_must_have_image_content_type() {
        let mut form = valid_form();
        form.image = Some(ImageAttachment {
            file_name: "cv.pdf".to_string(),
            content_type: "application/pdf".to_string(),
        });
        assert!(form.validate_field(ProfileField::Image, &limits()).is_some());

        form.image = Some(ImageAttachment {
            file_name: "me.png".to_string(),
            content_type: "image/png".to_string(),
        });
        assert!(form.validate_field(ProfileField::Image, &limits()).is_none());
    }

    #[test]
    fn all_messages_are_surfaced_at_once() {
        let form = ProfileForm::default();
        let errors = form.validate(&limits());

        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required."));
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("skills"));
        assert!(errors.contains_key("languages"));
        assert!(errors.contains_key("location"));
        // Optional fields stay silent when empty.
        assert!(!errors.contains_key("bio"));
        assert!(!errors.contains_key("phone"));
        assert!(!errors.contains_key("image"));
    }

    #[test]
    fn update_payload_takes_the_persisted_subset() {
        let form = valid_form();
        let update = ProfileUpdate::from(&form);
        assert_eq!(update.title, "Engineer");
        assert_eq!(update.skills, "go, rust");
        assert_eq!(update.phone, "");
    }
}
