//! Embedded table-creation migration, applied at service start.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled into the binary from `migrations/`.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failure to bring the schema up to date.
#[derive(Debug, thiserror::Error)]
#[error("database migration failed: {message}")]
pub struct MigrationError {
    message: String,
}

impl MigrationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Apply pending migrations over a short-lived synchronous connection.
///
/// Runs before the async pool is built; the connection is dropped as soon as
/// the harness finishes.
///
/// # Errors
///
/// Returns [`MigrationError`] when the database is unreachable or a
/// migration fails to apply.
pub fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn =
        PgConnection::establish(database_url).map_err(|err| MigrationError::new(err.to_string()))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::new(err.to_string()))?;

    for version in applied {
        info!(%version, "applied migration");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_failure() {
        let err = MigrationError::new("relation already exists");
        assert_eq!(
            err.to_string(),
            "database migration failed: relation already exists"
        );
    }
}
