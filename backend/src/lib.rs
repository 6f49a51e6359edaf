//! Roster backend library modules.
//!
//! A small HTTP service: greeting and search echoes plus a single-table user
//! registry persisted in PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
