pub(crate) type Username = String;

/// A seeded demo account. Passwords are stored in plaintext on purpose:
/// the exercise is about query construction, not credential storage.
#[derive(Clone, Debug)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: Username,
    pub(crate) password: String,
}
