//! In-memory store facades for the bookstore library
//!
//! Two independent components, each a facade over one owned collection:
//! - [`BookCatalog`]: ordered collection of `Book` records
//! - [`UserDirectory`]: `username -> User` mapping
//!
//! No control flow passes between the two. `BookCatalog::purchase` and
//! `BookCatalog::add_review` operate on the `User` value handed to
//! them; they never consult the directory.
//!
//! All operations are synchronous, single-threaded mutations on
//! process-local state. Each component owns its collection for its
//! lifetime; the backing collection can be injected through the
//! `with_*` constructors so tests substitute it directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod directory;

pub use catalog::BookCatalog;
pub use directory::UserDirectory;
