//! Core types for the bookstore library
//!
//! This crate defines the foundational types used throughout the system:
//! - Book: a catalog record (title, author, genre, price, reviews)
//! - User: a directory record (username, password, email, purchases)
//! - Error: error type hierarchy
//!
//! Records compare structurally: two books are equal when all their
//! fields match, independent of identity. There are no separate ID
//! fields.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Book, User};
