//! # Storage Layer
//!
//! The [`BookStore`] trait is the persistence boundary for the address book.
//! The whole book is read once at session start and written once at clean
//! shutdown; there is no incremental writing.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, a single JSON file at an
//!   explicit path (see [`crate::config::BookConfig::data_path`]).
//! - [`memory::InMemoryStore`]: keeps the last saved book in memory, used by
//!   command and API tests.
//!
//! ## Missing Data
//!
//! Loading from a store that has never been written returns an empty
//! [`AddressBook`]. Anything else that goes wrong (unreadable file, corrupt
//! JSON) is an error and is surfaced to the caller.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Load the persisted book, or an empty one if nothing was saved yet
    fn load(&self) -> Result<AddressBook>;

    /// Replace the persisted book with `book`
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
