use serde::Deserialize;

use crate::validate;

pub const NAME_MAX_LEN: usize = 100;
pub const NOTE_MAX_LEN: usize = 2000;

/// A submitted contact form. Bound fresh from the POST body on every
/// submission and discarded when the request completes.
///
/// Every field defaults to empty so that an absent field is an ordinary
/// validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Per-field validation messages for a contact submission.
#[derive(Debug, Default)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub note: Option<String>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.note.is_none()
    }
}

/// Validate a submitted contact form. All three fields are required;
/// email must additionally look like an address.
pub fn validate(form: &ContactForm) -> ContactErrors {
    ContactErrors {
        name: validate::required(&form.name, "Name", NAME_MAX_LEN),
        email: validate::email(&form.email),
        note: validate::required(&form.note, "Note", NOTE_MAX_LEN),
    }
}

/// Confirmation shown on the page after a successful submission.
pub fn confirmation_message(name: &str) -> String {
    format!("Thank you {name} for contacting us. We will get back to your shortly")
}
