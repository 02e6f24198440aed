use actix_session::Session;

const FLASH_KEY: &str = "flash";

/// Queue a message to be shown on the next rendered page.
pub fn set(session: &Session, message: &str) {
    let _ = session.insert(FLASH_KEY, message);
}

/// Take the pending message out of the session, if any.
/// Reading consumes it, so a message is rendered at most once.
pub fn take(session: &Session) -> Option<String> {
    let message = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if message.is_some() {
        session.remove(FLASH_KEY);
    }
    message
}
