pub(crate) mod customer;
pub(crate) mod request;
pub(crate) mod user;
