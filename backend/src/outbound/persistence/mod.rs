//! PostgreSQL persistence adapters using Diesel.
//!
//! Repository implementations only translate between Diesel row structs and
//! domain types; no business logic lives here. Row models (`models`) and the
//! table definition (`schema`) stay internal to this module, and connections
//! come from an explicitly owned bb8 pool with native async support through
//! `diesel-async`.

mod diesel_user_repository;
mod migrate;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrate::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
