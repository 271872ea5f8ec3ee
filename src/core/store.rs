use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Connection, Row};
use std::path::Path;

use crate::core::error::{ConfigError, Error};
use crate::types::user::User;

const SEED_ACCOUNTS: [(&str, &str); 2] = [("admin", "admin123"), ("user", "user123")];

/// File-backed user table. Deliberately unpooled: every call opens its own
/// connection and drops it on the way out, matching the demo's one-shot
/// query lifecycle.
#[derive(Clone, Debug)]
pub(crate) struct CredentialStore {
    options: SqliteConnectOptions,
}

impl CredentialStore {
    pub(crate) fn new(database_path: &Path) -> Self {
        Self {
            options: SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true),
        }
    }

    async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        SqliteConnection::connect_with(&self.options).await
    }

    /// Creates the user table if absent and seeds the two demo accounts.
    /// The UNIQUE constraint on username makes the seed insert-if-absent,
    /// so re-running never duplicates rows.
    pub(crate) async fn initialize(&self) -> Result<(), ConfigError> {
        let mut conn = self.connect().await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            );",
        )
        .execute(&mut conn)
        .await?;

        for (username, password) in SEED_ACCOUNTS {
            sqlx::query("INSERT OR IGNORE INTO users (username, password) VALUES (?, ?);")
                .bind(username)
                .bind(password)
                .execute(&mut conn)
                .await?;
        }

        Ok(())
    }

    /// Intentionally injectable lookup: both inputs are spliced straight
    /// into the statement text, so a quote in either field rewrites the
    /// predicate. Kept as the "before" half of the demonstration; never
    /// reuse this outside of it.
    pub(crate) async fn vulnerable_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, Error> {
        let mut conn = self.connect().await?;

        let query = format!(
            "SELECT id, username, password FROM users WHERE username='{}' AND password='{}';",
            username, password
        );

        match sqlx::query(&query)
            .map(map_user)
            .fetch_one(&mut conn)
            .await
        {
            Ok(user) => Ok(Some(user)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    /// The "after" half: same predicate, inputs bound as parameters, so no
    /// value can change the statement's structure.
    pub(crate) async fn secure_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, Error> {
        let mut conn = self.connect().await?;

        match sqlx::query("SELECT id, username, password FROM users WHERE username=? AND password=?;")
            .bind(username)
            .bind(password)
            .map(map_user)
            .fetch_one(&mut conn)
            .await
        {
            Ok(user) => Ok(Some(user)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }
}

fn map_user(row: SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        password: row.get("password"),
    }
}
