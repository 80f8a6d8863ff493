use std::fmt::{ Display, Formatter };

/// Reasons a contact form submission is refused.
///
/// `Display` renders the text shown to the visitor in the blocking alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MissingFields(Vec<&'static str>),
    InvalidEmail(String),
}

impl Display for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::MissingFields(_) => write!(f, "Please fill in all fields."),
            ContactError::InvalidEmail(_) => write!(f, "Please enter a valid email address."),
        }
    }
}

impl std::error::Error for ContactError {}
