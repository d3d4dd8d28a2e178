//! Contact Directory
//!
//! Singly linked chain of contacts in insertion order. Only the head is
//! tracked, so appending walks the whole chain. Lookups are linear.
//!
//! The directory enforces no uniqueness: callers check for an existing name
//! before `add` and decide whether a rename through `update` may collide.

mod node;
pub mod visualization;

pub use node::Node;
pub use visualization::VizToken;

use crate::types::Contact;
use std::fmt;
use tracing::debug;

/// Ordered, head-linked collection of contacts keyed by name
#[derive(Default)]
pub struct ContactDirectory {
    head: Option<Box<Node>>,
    size: usize,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reachable nodes
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// Append a contact at the tail and return the new node.
    pub fn add(&mut self, contact: Contact) -> &Node {
        self.size += 1;
        debug!(name = %contact.name, size = self.size, "contact appended");

        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        cursor.insert(Box::new(Node::new(contact)))
    }

    /// Nodes whose name or phone matches `term`, in chain order.
    ///
    /// Name matching is case-insensitive (containment when
    /// `include_similar`, equality otherwise). Phone matching is a literal
    /// substring test in both modes.
    pub fn search(&self, term: &str, include_similar: bool) -> Vec<&Node> {
        self.nodes()
            .filter(|node| node.matches(term, include_similar))
            .collect()
    }

    /// Unlink the first node whose name equals `name` exactly.
    ///
    /// Returns `false` when nothing matched.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        if self
            .head
            .as_ref()
            .is_some_and(|head| head.contact.name == name)
        {
            if let Some(mut removed) = self.head.take() {
                self.head = removed.next.take();
            }
            self.size -= 1;
            debug!(name, size = self.size, "contact removed at head");
            return true;
        }

        let mut prev = match self.head.as_mut() {
            Some(node) => node,
            None => return false,
        };
        loop {
            let hit = match prev.next.as_ref() {
                Some(node) => node.contact.name == name,
                None => return false,
            };
            if hit {
                if let Some(mut removed) = prev.next.take() {
                    prev.next = removed.next.take();
                }
                self.size -= 1;
                debug!(name, size = self.size, "contact removed");
                return true;
            }
            prev = match prev.next.as_mut() {
                Some(node) => node,
                None => return false,
            };
        }
    }

    /// Replace the contact held by the node named `old_name`, in place.
    ///
    /// The new contact may carry a different name, including one already
    /// present elsewhere in the chain.
    pub fn update(&mut self, old_name: &str, contact: Contact) -> bool {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.contact.name == old_name {
                debug!(old_name, new_name = %contact.name, "contact updated");
                node.contact = contact;
                return true;
            }
            cursor = node.next.as_deref_mut();
        }
        false
    }

    /// All contacts from head to tail
    pub fn get_all(&self) -> Vec<&Contact> {
        self.iter().collect()
    }

    /// Chain order as names joined by separator markers (none trailing).
    pub fn get_visualization(&self) -> Vec<VizToken> {
        let mut tokens = Vec::with_capacity((self.size * 2).saturating_sub(1));
        for node in self.nodes() {
            tokens.push(VizToken::Name(node.contact.name.clone()));
            if node.next.is_some() {
                tokens.push(VizToken::Separator);
            }
        }
        tokens
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: self.nodes(),
        }
    }

    fn nodes(&self) -> Nodes<'_> {
        Nodes {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for ContactDirectory {
    // Unlink iteratively; the default drop would recurse once per node.
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl Clone for ContactDirectory {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl fmt::Debug for ContactDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<Contact> for ContactDirectory {
    fn extend<I: IntoIterator<Item = Contact>>(&mut self, iter: I) {
        for contact in iter {
            self.add(contact);
        }
    }
}

impl FromIterator<Contact> for ContactDirectory {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut directory = ContactDirectory::new();
        directory.extend(iter);
        directory
    }
}

impl<'a> IntoIterator for &'a ContactDirectory {
    type Item = &'a Contact;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct Nodes<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

/// Borrowing iterator over contacts in chain order
pub struct Iter<'a> {
    nodes: Nodes<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &node.contact)
    }
}
