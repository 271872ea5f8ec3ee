use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::path::Path;

use crate::core::config::Args;
use crate::core::error::ConfigError;
use crate::core::store::CredentialStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: CredentialStore,
    key: Key,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .finish()
    }
}

impl AppState {
    pub(crate) fn new(config: &Args) -> Result<Self, ConfigError> {
        // Key::from panics below 64 bytes of material
        if config.secret.len() < 64 {
            return Err(ConfigError::SessionSecret);
        }

        Ok(AppState {
            store: CredentialStore::new(Path::new(&config.database_path)),
            key: Key::from(config.secret.as_bytes()),
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

#[cfg(test)]
impl AppState {
    pub(crate) fn for_tests(database_path: &Path) -> Self {
        AppState {
            store: CredentialStore::new(database_path),
            key: Key::from(&[0u8; 64]),
        }
    }
}
