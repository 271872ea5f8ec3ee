pub(crate) mod encode;
pub(crate) mod session;
