//! Diesel row structs for the `users` table.

use diesel::prelude::*;

use crate::domain::{NewUser, User};

use super::schema::users;

/// Row read back from the `users` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(super) struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            is_active: row.is_active,
        }
    }
}

/// Insertable projection of a creation payload.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(super) struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub is_active: bool,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            username: &user.username,
            email: &user.email,
            is_active: user.is_active,
        }
    }
}
