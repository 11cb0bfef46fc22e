//! Seed accounts
//!
//! Users present in every freshly started store. Passwords are plain text,
//! same as records created through signup.

/// `(email, password, name)` for each seed account, in insertion order.
pub const SEED_USERS: &[(&str, &str, &str)] = &[
    ("user1@example.com", "1234", "Aarav"),
    ("user2@example.com", "abcd", "Diya"),
];
