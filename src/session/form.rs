//! Contact form input and validation.

use crate::error::ApiError;
use crate::types::Contact;

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Prefill from an existing contact (edit mode)
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone().unwrap_or_default(),
        }
    }

    /// Trim every field and build a contact.
    ///
    /// Name and phone are required; a blank email becomes `None`.
    pub fn validate(&self) -> Result<Contact, ApiError> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(ApiError::InvalidContact(
                "please fill in at least the name and phone".to_string(),
            ));
        }
        Ok(Contact::new(name, phone).with_email(self.email.trim()))
    }
}
