mod contact;
mod dom;

pub use contact::ContactError;
pub use dom::DomError;
