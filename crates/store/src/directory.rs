//! UserDirectory: username-to-user mapping
//!
//! ## Design
//!
//! The directory is a facade over a single owned
//! `HashMap<String, User>`, keyed by username. Registration enforces
//! key uniqueness; login compares the stored plaintext password
//! exactly. A profile update that renames a user re-keys the map so the
//! mapping stays consistent with the record's username field.
//!
//! There is no blank-field validation anywhere: empty usernames,
//! passwords, and emails are stored as given. The only place emptiness
//! matters is `login`, which treats an empty username or password as a
//! guaranteed miss.

use bookstore_core::{Error, Result, User};
use std::collections::HashMap;

/// In-memory mapping from username to user record
///
/// # Example
///
/// ```
/// use bookstore_core::User;
/// use bookstore_store::UserDirectory;
///
/// let mut directory = UserDirectory::new();
/// directory
///     .register(User::new("john_doe", "password123", "john@example.com"))
///     .unwrap();
/// assert!(directory.login("john_doe", "password123").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Create a directory over an injected backing map
    ///
    /// Lets tests substitute the backing store directly instead of
    /// reaching into private state.
    pub fn with_users(users: HashMap<String, User>) -> Self {
        Self { users }
    }

    /// Register a new user
    ///
    /// Returns `Error::UsernameTaken` if the username is already a key;
    /// the stored record is left untouched in that case. Empty
    /// usernames are accepted.
    pub fn register(&mut self, user: User) -> Result<()> {
        if self.users.contains_key(&user.username) {
            return Err(Error::UsernameTaken {
                username: user.username.clone(),
            });
        }
        tracing::debug!(username = %user.username, "user registered");
        self.users.insert(user.username.clone(), user);
        Ok(())
    }

    /// Look up a user by credentials
    ///
    /// Returns the record iff `username` is a key and the stored
    /// password equals `password` exactly (case-sensitive, plaintext).
    /// An empty username or password never matches.
    pub fn login(&self, username: &str, password: &str) -> Option<&User> {
        if username.is_empty() || password.is_empty() {
            return None;
        }
        self.users.get(username).filter(|u| u.password == password)
    }

    /// Overwrite a user's username, password, and email
    ///
    /// Returns `Error::UnknownUser` if `username` is not a key, and
    /// `Error::UsernameTaken` if `new_username` differs from `username`
    /// but already belongs to another user; the record is unmodified on
    /// either failure. On a rename the map is re-keyed under
    /// `new_username`. Empty strings are accepted for all three fields.
    pub fn update_profile(
        &mut self,
        username: &str,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> Result<()> {
        let mut user = self
            .users
            .remove(username)
            .ok_or_else(|| Error::UnknownUser {
                username: username.to_string(),
            })?;

        if new_username != username && self.users.contains_key(new_username) {
            // Put the record back untouched
            self.users.insert(username.to_string(), user);
            return Err(Error::UsernameTaken {
                username: new_username.to_string(),
            });
        }

        user.username = new_username.to_string();
        user.password = new_password.to_string();
        user.email = new_email.to_string();
        tracing::debug!(old = username, new = new_username, "user profile updated");
        self.users.insert(user.username.clone(), user);
        Ok(())
    }

    /// Look up a user record by username
    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Mutable lookup, for callers recording purchases on the stored record
    pub fn get_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    /// Whether a user with this username exists
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
