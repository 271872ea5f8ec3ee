pub(crate) mod admin;
pub(crate) mod login;
pub(crate) mod router;
