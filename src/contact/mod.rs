//! Contact form handling.
//!
//! The page has no backend: a valid submission becomes a `mailto:` link that
//! hands the message to the visitor's mail client.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ContactError;

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! Your email client should open with the message ready to send.";

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Field values as read from the form; `None` when the field is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        let message = ContactMessage {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            subject: self.subject.clone().unwrap_or_default(),
            message: self.message.clone().unwrap_or_default(),
        };
        if !is_valid_email(&message.email) {
            return Err(ContactError::InvalidEmail(message.email));
        }
        Ok(message)
    }
}

impl ContactMessage {
    pub fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\nMessage:\n{}", self.name, self.email, self.message)
    }

    pub fn mailto_link(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body())
        )
    }
}
