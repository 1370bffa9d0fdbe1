//! Record types for the bookstore library
//!
//! This module defines the two entity records:
//! - Book: catalog entry with title, author, genre, price, and reviews
//! - User: directory entry with username, password, email, and purchases
//!
//! Identity is structural. Two books with the same fields are the same
//! book for duplicate detection, removal, and purchase checks. Because
//! `price` is an `f64`, the records implement `PartialEq` but not
//! `Eq`/`Hash`; the directory keys on the username string instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A book record in the catalog
///
/// Reviews are an ordered sequence of free-form strings, appended by
/// `BookCatalog::add_review`. There is no review validation: empty
/// strings are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Genre label
    pub genre: String,
    /// Price in the store currency
    pub price: f64,
    /// Reviews in the order they were posted
    pub reviews: Vec<String>,
}

impl Book {
    /// Create a new book with no reviews
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            price,
            reviews: Vec::new(),
        }
    }

    /// Whether two records describe the same edition
    ///
    /// Compares title, author, genre, and price, ignoring reviews.
    /// Purchase containment uses this so a copy that accumulates
    /// reviews still matches the un-reviewed copy recorded at purchase
    /// time.
    pub fn same_edition(&self, other: &Book) -> bool {
        self.title == other.title
            && self.author == other.author
            && self.genre == other.genre
            && self.price == other.price
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// A user record in the directory
///
/// The username acts as the unique key in `UserDirectory`. The password
/// is stored and compared as plaintext; no field-emptiness invariants
/// are enforced on any of the text fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique username (directory key)
    pub username: String,
    /// Plaintext password
    pub password: String,
    /// Contact email
    pub email: String,
    /// Books this user has purchased, in purchase order
    pub purchased_books: Vec<Book>,
}

impl User {
    /// Create a new user with no purchases
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            purchased_books: Vec::new(),
        }
    }

    /// Whether this user has purchased this edition of a book
    ///
    /// Matches on [`Book::same_edition`], so reviews posted after the
    /// purchase do not disqualify the book.
    pub fn has_purchased(&self, book: &Book) -> bool {
        self.purchased_books.iter().any(|b| b.same_edition(book))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}
