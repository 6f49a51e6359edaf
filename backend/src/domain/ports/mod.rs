//! Port traits implemented by outbound adapters.

mod user_repository;

pub use user_repository::{UserPersistenceError, UserRepository};
