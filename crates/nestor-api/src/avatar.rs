//! Avatar fallback
//!
//! Contacts without an explicit avatar get a gravatar URL derived from
//! their email, so client lists always have something to render.

use std::fmt::Write;

use nestor_models::Contact;

/// Fill `avatar_url` from the email when the contact has not set one
pub fn with_fallback(mut contact: Contact) -> Contact {
    if contact.avatar_url.is_none() {
        contact.avatar_url = contact.email.as_deref().map(gravatar_url);
    }
    contact
}

fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = md5::compute(normalized.as_bytes());
    let mut hash = String::with_capacity(32);
    for byte in digest.iter() {
        write!(hash, "{:02x}", byte).unwrap();
    }
    format!("https://www.gravatar.com/avatar/{}?d=identicon", hash)
}
