//! User store
//!
//! An ordered, append-only list of user records searched linearly.
//! Email uniqueness is checked by the caller (`auth::signup`) before
//! `append`; the store itself does not enforce it.

use super::seed::SEED_USERS;

/// One registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl UserRecord {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

/// Registered users, in insertion order
#[derive(Debug, Default, Clone)]
pub struct UserStore {
    users: Vec<UserRecord>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the seed accounts.
    pub fn seeded() -> Self {
        let users = SEED_USERS
            .iter()
            .map(|(email, password, name)| UserRecord::new(*email, *password, *name))
            .collect();
        Self { users }
    }

    /// First record whose email matches exactly (case-sensitive).
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }

    /// First record whose email and password both match exactly.
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
    }

    /// Adds a record to the end of the store.
    pub fn append(&mut self, record: UserRecord) {
        self.users.push(record);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_both_seed_users_in_order() {
        let store = UserStore::seeded();
        let names: Vec<_> = store.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Aarav", "Diya"]);
    }

    #[test]
    fn find_by_email_is_case_sensitive() {
        let store = UserStore::seeded();
        assert!(store.find_by_email("user1@example.com").is_some());
        assert!(store.find_by_email("USER1@example.com").is_none());
    }

    #[test]
    fn find_by_credentials_requires_both_fields() {
        let store = UserStore::seeded();
        let user = store.find_by_credentials("user2@example.com", "abcd").unwrap();
        assert_eq!(user.name, "Diya");
        assert!(store.find_by_credentials("user2@example.com", "1234").is_none());
        assert!(store.find_by_credentials("user1@example.com", "abcd").is_none());
    }

    #[test]
    fn append_adds_to_the_end() {
        let mut store = UserStore::new();
        assert!(store.is_empty());
        store.append(UserRecord::new("a@b.c", "secret", "A"));
        store.append(UserRecord::new("d@e.f", "secret", "D"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.iter().last().unwrap().email, "d@e.f");
    }

    #[test]
    fn lookups_return_first_match() {
        let mut store = UserStore::new();
        store.append(UserRecord::new("dup@x.y", "one", "First"));
        store.append(UserRecord::new("dup@x.y", "one", "Second"));
        assert_eq!(store.find_by_email("dup@x.y").unwrap().name, "First");
        assert_eq!(
            store.find_by_credentials("dup@x.y", "one").unwrap().name,
            "First"
        );
    }
}
