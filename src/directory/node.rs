//! Chain node and match predicates

use crate::types::Contact;

/// One link in the directory chain.
///
/// Owns its contact and, exclusively, the rest of the chain behind it.
#[derive(Debug)]
pub struct Node {
    pub(crate) contact: Contact,
    pub(crate) next: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn new(contact: Contact) -> Self {
        Node {
            contact,
            next: None,
        }
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    /// The following node, or `None` at the tail
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    /// Case-insensitive name match: containment when `include_similar`,
    /// equality otherwise.
    pub fn name_matches(&self, term: &str, include_similar: bool) -> bool {
        let name = self.contact.name.to_lowercase();
        let term = term.to_lowercase();
        if include_similar {
            name.contains(&term)
        } else {
            name == term
        }
    }

    /// Literal, case-sensitive containment within the phone field
    pub fn phone_matches(&self, term: &str) -> bool {
        self.contact.phone.contains(term)
    }

    pub fn matches(&self, term: &str, include_similar: bool) -> bool {
        self.name_matches(term, include_similar) || self.phone_matches(term)
    }
}
