//! BookCatalog: ordered collection of book records
//!
//! ## Design
//!
//! The catalog is a facade over a single owned `Vec<Book>`. Insertion
//! order is preserved and is the order every query reports results in.
//! Duplicate detection uses structural equality over the whole record.
//!
//! ## Purchases and reviews
//!
//! `purchase` and `add_review` take the affected `User` directly and
//! never consult the `UserDirectory`. A purchase appends a clone of the
//! catalog entry to the user's purchase list; a review is appended to
//! the book value passed in, not to a catalog entry.

use bookstore_core::{Book, Error, Result, User};

/// Ordered in-memory collection of books
///
/// # Example
///
/// ```
/// use bookstore_core::Book;
/// use bookstore_store::BookCatalog;
///
/// let mut catalog = BookCatalog::new();
/// catalog.add_book(Book::new("Dune", "Herbert", "SF", 10.99)).unwrap();
/// assert_eq!(catalog.search("Dune").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BookCatalog {
    books: Vec<Book>,
}

impl BookCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Create a catalog over an injected backing collection
    ///
    /// Lets tests and callers seed the catalog directly instead of
    /// reaching into private state.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Add a book to the catalog
    ///
    /// Returns `Error::DuplicateBook` if a structurally equal entry is
    /// already present.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        if self.books.contains(&book) {
            return Err(Error::DuplicateBook {
                title: book.title.clone(),
            });
        }
        tracing::debug!(title = %book.title, "book added to catalog");
        self.books.push(book);
        Ok(())
    }

    /// Remove the first structurally equal entry from the catalog
    ///
    /// Returns `Error::BookNotFound` if no entry matches, including on
    /// an empty catalog.
    pub fn remove_book(&mut self, book: &Book) -> Result<()> {
        match self.books.iter().position(|b| b == book) {
            Some(idx) => {
                self.books.remove(idx);
                tracing::debug!(title = %book.title, "book removed from catalog");
                Ok(())
            }
            None => Err(Error::BookNotFound {
                title: book.title.clone(),
            }),
        }
    }

    /// Search for books whose title or author contains `keyword`
    ///
    /// Matching is a case-sensitive substring check. The empty keyword
    /// matches every book. Results are clones in insertion order.
    pub fn search(&self, keyword: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.title.contains(keyword) || b.author.contains(keyword))
            .cloned()
            .collect()
    }

    /// Record a purchase of `book` by `user`
    ///
    /// Returns `Error::BookNotFound` unless a structurally equal entry
    /// is in the catalog. On success a clone of `book` is appended to
    /// the user's purchase list.
    pub fn purchase(&self, user: &mut User, book: &Book) -> Result<()> {
        if !self.books.contains(book) {
            return Err(Error::BookNotFound {
                title: book.title.clone(),
            });
        }
        tracing::debug!(username = %user.username, title = %book.title, "book purchased");
        user.purchased_books.push(book.clone());
        Ok(())
    }

    /// Append a review to `book` on behalf of `user`
    ///
    /// Returns `Error::NotPurchased` unless the user's purchase list
    /// contains the same edition of `book` (`Book::same_edition`, which
    /// ignores reviews — so a book stays reviewable after its first
    /// review). The review text itself is not validated; the empty
    /// string is stored as given. The review lands on the book value
    /// passed in, not on any catalog entry.
    pub fn add_review(
        &self,
        user: &User,
        book: &mut Book,
        review: impl Into<String>,
    ) -> Result<()> {
        if !user.has_purchased(book) {
            return Err(Error::NotPurchased {
                username: user.username.clone(),
                title: book.title.clone(),
            });
        }
        tracing::debug!(username = %user.username, title = %book.title, "review added");
        book.reviews.push(review.into());
        Ok(())
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Whether a structurally equal book is in the catalog
    pub fn contains(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
