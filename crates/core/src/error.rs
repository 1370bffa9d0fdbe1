//! Error types for the bookstore library
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Every variant represents an unmet precondition on a catalog or
//! directory operation. Lookups that can simply come up empty
//! (`UserDirectory::login`) return `Option` instead of an error.

use thiserror::Error;

/// Result type alias for bookstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the bookstore library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A structurally equal book is already in the catalog
    #[error("book already in catalog: {title}")]
    DuplicateBook {
        /// Title of the offending book
        title: String,
    },

    /// The book is not in the catalog
    #[error("book not in catalog: {title}")]
    BookNotFound {
        /// Title of the missing book
        title: String,
    },

    /// The user has not purchased the book being reviewed
    #[error("book not purchased by {username}: {title}")]
    NotPurchased {
        /// Username of the would-be reviewer
        username: String,
        /// Title of the unpurchased book
        title: String,
    },

    /// The username is already registered in the directory
    #[error("username already taken: {username}")]
    UsernameTaken {
        /// The conflicting username
        username: String,
    },

    /// No user with this username exists in the directory
    #[error("unknown user: {username}")]
    UnknownUser {
        /// The unknown username
        username: String,
    },
}
