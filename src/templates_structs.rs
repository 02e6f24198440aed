// Template context structures for Askama templates.

use askama::Template;

use crate::models::contact::{ContactErrors, ContactForm};

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub flash: Option<String>,
    pub csrf_token: String,
    pub form: ContactForm,
    pub errors: ContactErrors,
}
