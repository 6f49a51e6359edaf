//! Diesel table definition for the `users` relation.
//!
//! Kept in lockstep with the embedded migration under `migrations/`.

diesel::table! {
    /// Registered users keyed by a database-generated id.
    users (id) {
        /// Primary key, assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Unique login name.
        username -> Text,
        /// Unique contact address.
        email -> Text,
        /// Soft-activation flag, defaults to true.
        is_active -> Bool,
    }
}
