//! Shared test infrastructure for page-level tests.
//!
//! Builds the application the way `main.rs` does (session middleware plus
//! the contact routes), with a fixed session key so runs are deterministic.
//! Static files and the 404 fallback are left out; they are not under test.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, Error, test, web};
use regex::Regex;

use reachout::handlers;

pub const TEST_NAME: &str = "Alice";
pub const TEST_EMAIL: &str = "alice@example.com";
pub const TEST_NOTE: &str = "Hello";

pub fn build_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let session_mw =
        SessionMiddleware::builder(CookieSessionStore::default(), Key::from(&[0u8; 64]))
            .cookie_secure(false)
            .cookie_http_only(true)
            .build();

    App::new()
        .wrap(session_mw)
        .route("/contact", web::get().to(handlers::contact_handlers::page))
        .route("/contact", web::post().to(handlers::contact_handlers::submit))
}

/// Pull the session cookie out of a response, if the middleware set one.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    let set_cookie = resp.headers().get(header::SET_COOKIE)?;
    let raw = set_cookie.to_str().expect("Set-Cookie not utf-8").to_string();
    Some(Cookie::parse_encoded(raw).expect("Failed to parse session cookie").into_owned())
}

/// Read a response body as a string.
pub async fn read_body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

/// Scrape the CSRF token out of a rendered form.
pub fn extract_csrf(body: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#)
        .expect("Invalid csrf regex");
    re.captures(body)
        .expect("No csrf token in page")
        .get(1)
        .expect("Empty csrf capture")
        .as_str()
        .to_string()
}

/// Url-encode a form body from key/value pairs.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).expect("Failed to encode form body")
}
