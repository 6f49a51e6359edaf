//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

/// Persistence failures surfaced by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// A connection could not be checked out or was lost mid-operation.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Driver-level failure description.
        message: String,
    },
    /// The insert collided with an existing username or email.
    #[error("user already exists: {message}")]
    Duplicate {
        /// Constraint violation description from the database.
        message: String,
    },
    /// The query failed during execution.
    #[error("user repository query failed: {message}")]
    Query {
        /// Driver-level failure description.
        message: String,
    },
}

impl UserPersistenceError {
    /// Connection-level failure.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Unique-constraint collision.
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate {
            message: message.into(),
        }
    }

    /// Query execution failure.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage seam for the user-creation flow.
///
/// The write endpoint is the only caller; this system never updates or
/// deletes users, and the id-echo route performs no lookup.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert one user and return the persisted row with its generated id.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;
}
