//! Contactbook: In-Memory Contact Book
//!
//! A contact directory kept as a singly linked list, wrapped by a session
//! layer that applies form validation and naming policy, and driven from an
//! interactive terminal shell. State lives only for the lifetime of the process.

pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod session;
pub mod tooling;
pub mod types;

pub use directory::{ContactDirectory, Node, VizToken};
pub use error::ApiError;
pub use session::{ContactBook, ContactForm, Notice, NoticeLevel};
pub use types::Contact;
