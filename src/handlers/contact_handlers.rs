use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::csrf;
use crate::errors::{AppError, render};
use crate::flash;
use crate::models::contact::{self, ContactErrors, ContactForm};
use crate::templates_structs::ContactTemplate;

pub async fn page(session: Session) -> Result<HttpResponse, AppError> {
    let flash = flash::take(&session);
    let csrf_token = csrf::get_or_create_token(&session);

    let tmpl = ContactTemplate {
        flash,
        csrf_token,
        form: ContactForm::default(),
        errors: ContactErrors::default(),
    };
    render(tmpl)
}

pub async fn submit(
    session: Session,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let form = form.into_inner();
    let errors = contact::validate(&form);

    if !errors.is_empty() {
        let csrf_token = csrf::get_or_create_token(&session);
        let tmpl = ContactTemplate {
            flash: None,
            csrf_token,
            form,
            errors,
        };
        return render(tmpl);
    }

    flash::set(&session, &contact::confirmation_message(form.name.trim()));
    Ok(HttpResponse::Found()
        .insert_header(("Location", "/contact"))
        .finish())
}
