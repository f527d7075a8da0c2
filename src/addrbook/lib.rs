//! # Addrbook Architecture
//!
//! Addrbook is an interactive address book: names, phone numbers and
//! birthdays, persisted between sessions, with a weekly birthday reminder.
//! The library holds everything except terminal I/O; the binary is a thin
//! read-line / dispatch / print loop on top of [`api::BookApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, logging, the session loop, colored output         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses input lines, dispatches to commands               │
//! │  - Maps command errors to messages                          │
//! │  - Saves the book when the session ends                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per command, `Result<CmdResult>`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, book.rs, birthdays.rs)                     │
//! │  - Records, the address book, the birthday scheduler        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade
//! - [`commands`]: One module per interactive command, plus the line parser
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`book`]: The `AddressBook` collection
//! - [`birthdays`]: Upcoming birthday computation
//! - [`store`]: Persistence
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod birthdays;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
