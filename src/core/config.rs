use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) database_path: String,
    /// Keys the signed session cookie; must be at least 64 bytes.
    pub(crate) secret: String,
    pub(crate) log_level: String,
    pub(crate) port: u16,
}
