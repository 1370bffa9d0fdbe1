//! Bookstore - embedded in-memory bookstore library
//!
//! Two independent components, each owning one in-memory collection:
//! a [`BookCatalog`] of book records and a [`UserDirectory`] mapping
//! usernames to user records.
//!
//! # Quick Start
//!
//! ```
//! use bookstore::{Book, BookCatalog, User, UserDirectory};
//!
//! let mut catalog = BookCatalog::new();
//! catalog.add_book(Book::new("Dune", "Herbert", "SF", 10.99))?;
//!
//! let mut directory = UserDirectory::new();
//! directory.register(User::new("john_doe", "password123", "john@example.com"))?;
//!
//! let book = Book::new("Dune", "Herbert", "SF", 10.99);
//! let user = directory.get_mut("john_doe").unwrap();
//! catalog.purchase(user, &book)?;
//! # Ok::<(), bookstore::Error>(())
//! ```
//!
//! # Architecture
//!
//! `bookstore-core` holds the record types and error hierarchy;
//! `bookstore-store` holds the two facades. This crate re-exports the
//! public API. Everything is synchronous and process-local: no
//! networking, no persistence, no locking.

// Re-export the public API from the member crates
pub use bookstore_core::{Book, Error, Result, User};
pub use bookstore_store::{BookCatalog, UserDirectory};
