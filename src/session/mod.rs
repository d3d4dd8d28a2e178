//! Contact Book Session
//!
//! Presentation-side adapter around a [`ContactDirectory`]. Owns the
//! add/edit toggle and applies the policies the directory leaves to its
//! caller: field validation, the duplicate-name check on add, confirmation
//! before removal, and startup seeding.

pub mod form;
pub mod notice;

pub use form::ContactForm;
pub use notice::{Notice, NoticeLevel};

use crate::directory::{ContactDirectory, VizToken};
use crate::error::ApiError;
use crate::types::Contact;
use serde::Serialize;
use tracing::{info, warn};

/// Asks the user to approve a destructive action.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> Result<bool, ApiError>;
}

impl<F> Confirmer for F
where
    F: FnMut(&str) -> Result<bool, ApiError>,
{
    fn confirm(&mut self, prompt: &str) -> Result<bool, ApiError> {
        self(prompt)
    }
}

/// Approves everything (`--force`, scripted use)
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> Result<bool, ApiError> {
        Ok(true)
    }
}

/// One search result with the fields that produced it
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub contact: &'a Contact,
    /// Name contains the term, regardless of search mode; drives highlighting
    pub name_match: bool,
    pub phone_match: bool,
}

#[derive(Debug, Clone)]
pub enum SearchOutcome<'a> {
    /// Blank term: nothing searched, results cleared
    Cleared,
    Hits(Vec<SearchHit<'a>>),
}

/// Session state: the directory plus the edit-mode toggle
#[derive(Debug, Default)]
pub struct ContactBook {
    directory: ContactDirectory,
    editing: Option<String>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(directory: ContactDirectory) -> Self {
        Self {
            directory,
            editing: None,
        }
    }

    /// Load startup contacts, bypassing form validation.
    pub fn seed<I>(&mut self, contacts: I) -> usize
    where
        I: IntoIterator<Item = Contact>,
    {
        let before = self.directory.len();
        self.directory.extend(contacts);
        let added = self.directory.len() - before;
        info!(added, "directory seeded");
        added
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    pub fn contacts(&self) -> Vec<&Contact> {
        self.directory.get_all()
    }

    pub fn visualization(&self) -> Vec<VizToken> {
        self.directory.get_visualization()
    }

    pub fn count(&self) -> usize {
        self.directory.len()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Name captured when the current edit began
    pub fn editing_name(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Submit the form: add in normal mode, update in edit mode.
    ///
    /// Only additions are checked for an existing name. An edit may rename a
    /// contact onto a name already in use.
    pub fn submit(&mut self, form: &ContactForm) -> Result<Notice, ApiError> {
        let contact = form.validate().map_err(|e| {
            warn!("form rejected: {}", e);
            e
        })?;

        match self.editing.take() {
            Some(old_name) => {
                if !self.directory.update(&old_name, contact) {
                    warn!(old_name = %old_name, "edited contact no longer exists");
                    return Err(ApiError::ContactNotFound(old_name));
                }
                info!(old_name = %old_name, "contact updated");
                Ok(Notice::success("Contact updated successfully."))
            }
            None => {
                // Same lookup as the search box: exact name, or a phone containing the name.
                if !self.directory.search(&contact.name, false).is_empty() {
                    warn!(name = %contact.name, "duplicate name rejected");
                    return Err(ApiError::DuplicateName(contact.name));
                }
                info!(name = %contact.name, "contact added");
                self.directory.add(contact);
                Ok(Notice::success("Contact added successfully."))
            }
        }
    }

    /// Enter edit mode for `name` and return the prefilled form.
    pub fn begin_edit(&mut self, name: &str) -> Result<(ContactForm, Notice), ApiError> {
        let form = self
            .directory
            .iter()
            .find(|c| c.name == name)
            .map(ContactForm::from_contact)
            .ok_or_else(|| ApiError::ContactNotFound(name.to_string()))?;
        self.editing = Some(name.to_string());
        Ok((form, Notice::info(format!("Editing contact: {}", name))))
    }

    pub fn cancel_edit(&mut self) -> Notice {
        self.editing = None;
        Notice::info("Edit cancelled.")
    }

    /// Remove `name` after confirmation. `Ok(None)` when the user declines.
    ///
    /// A name that is not in the directory is a silent no-op and still
    /// reports success.
    pub fn delete<C>(&mut self, name: &str, confirmer: &mut C) -> Result<Option<Notice>, ApiError>
    where
        C: Confirmer + ?Sized,
    {
        let prompt = format!("Are you sure you want to delete the contact \"{}\"?", name);
        if !confirmer.confirm(&prompt)? {
            return Ok(None);
        }

        let removed = self.directory.remove_by_name(name);
        info!(name, removed, "delete requested");

        if self.editing.as_deref() == Some(name) {
            self.cancel_edit();
        }
        Ok(Some(Notice::success("Contact deleted successfully.")))
    }

    /// Search by trimmed term; a blank term clears instead of matching everything.
    pub fn search(&self, term: &str, include_similar: bool) -> SearchOutcome<'_> {
        let term = term.trim();
        if term.is_empty() {
            return SearchOutcome::Cleared;
        }
        let hits = self
            .directory
            .search(term, include_similar)
            .into_iter()
            .map(|node| SearchHit {
                contact: node.contact(),
                name_match: node.name_matches(term, true),
                phone_match: node.phone_matches(term),
            })
            .collect();
        SearchOutcome::Hits(hits)
    }
}
