//! End-to-end flows over the public API
//!
//! Exercises the two facades together the way an application would:
//! register a user, stock the catalog, log in, purchase, review.

use bookstore::{Book, BookCatalog, Error, User, UserDirectory};

#[test]
fn register_login_purchase_review_flow() {
    let mut catalog = BookCatalog::new();
    let mut directory = UserDirectory::new();

    catalog
        .add_book(Book::new("Dune", "Herbert", "SF", 10.99))
        .unwrap();
    catalog
        .add_book(Book::new("Foundation", "Asimov", "SF", 12.99))
        .unwrap();

    directory
        .register(User::new("john_doe", "password123", "john@example.com"))
        .unwrap();

    // Login with the registered credentials
    assert!(directory.login("john_doe", "password123").is_some());
    assert!(directory.login("john_doe", "wrongpassword").is_none());

    // Purchase a listed book against the stored record
    let dune = Book::new("Dune", "Herbert", "SF", 10.99);
    let user = directory.get_mut("john_doe").unwrap();
    catalog.purchase(user, &dune).unwrap();
    assert_eq!(user.purchased_books.len(), 1);

    // Review the purchased book
    let mut reviewed = dune.clone();
    let user = directory.get("john_doe").unwrap();
    catalog.add_review(user, &mut reviewed, "Great book!").unwrap();
    assert_eq!(reviewed.reviews, vec!["Great book!".to_string()]);

    // An unpurchased book cannot be reviewed
    let mut foundation = Book::new("Foundation", "Asimov", "SF", 12.99);
    let err = catalog
        .add_review(user, &mut foundation, "looks good")
        .unwrap_err();
    assert!(matches!(err, Error::NotPurchased { .. }));
}

#[test]
fn purchase_requires_listed_book() {
    let mut catalog = BookCatalog::new();
    catalog
        .add_book(Book::new("Dune", "Herbert", "SF", 10.99))
        .unwrap();

    let mut user = User::new("john_doe", "password123", "john@example.com");

    let unlisted = Book::new("Hyperion", "Simmons", "SF", 9.99);
    assert!(matches!(
        catalog.purchase(&mut user, &unlisted),
        Err(Error::BookNotFound { .. })
    ));

    // Removing a book makes it unpurchasable
    let dune = Book::new("Dune", "Herbert", "SF", 10.99);
    catalog.remove_book(&dune).unwrap();
    assert!(matches!(
        catalog.purchase(&mut user, &dune),
        Err(Error::BookNotFound { .. })
    ));
    assert!(user.purchased_books.is_empty());
}

#[test]
fn search_is_case_sensitive_over_title_and_author() {
    let catalog = BookCatalog::with_books(vec![
        Book::new("Dune", "Herbert", "SF", 10.99),
        Book::new("Foundation", "Asimov", "SF", 12.99),
    ]);

    // Lowercase 'a' appears only in "Foundation"
    let hits = catalog.search("a");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Foundation");

    // Uppercase 'A' appears only in "Asimov"
    let hits = catalog.search("A");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].author, "Asimov");

    // No record contains 'z' in either case
    assert!(catalog.search("z").is_empty());

    // Empty keyword returns the full catalog in insertion order
    let all = catalog.search("");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Dune");
    assert_eq!(all[1].title, "Foundation");
}

#[test]
fn profile_rename_keeps_login_consistent() {
    let mut directory = UserDirectory::new();
    directory
        .register(User::new("john_doe", "password123", "john@example.com"))
        .unwrap();
    directory
        .register(User::new("jane_doe", "password123", "jane@example.com"))
        .unwrap();

    // Renaming onto another user's name is refused
    let err = directory
        .update_profile("john_doe", "jane_doe", "newpassword", "john_new@example.com")
        .unwrap_err();
    assert!(matches!(err, Error::UsernameTaken { .. }));
    assert!(directory.login("john_doe", "password123").is_some());

    // A free name goes through and the map is re-keyed
    directory
        .update_profile("john_doe", "johnny", "newpassword", "john_new@example.com")
        .unwrap();
    assert!(directory.login("john_doe", "password123").is_none());
    let user = directory.login("johnny", "newpassword").unwrap();
    assert_eq!(user.email, "john_new@example.com");
    assert_eq!(directory.len(), 2);
}
