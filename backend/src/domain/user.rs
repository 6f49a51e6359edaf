//! User entity and creation payload.

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Database-generated identifier.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Soft-activation flag.
    pub is_active: bool,
}

/// Attributes required to create a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Unique login name.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Soft-activation flag, true unless the caller says otherwise.
    pub is_active: bool,
}

impl NewUser {
    /// Build a creation payload with `is_active` defaulted to true.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            is_active: true,
        }
    }

    /// Override the active flag.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_defaults_to_active() {
        let user = NewUser::new("manu", "manu@example.com");
        assert!(user.is_active);
    }

    #[test]
    fn with_active_overrides_the_flag() {
        let user = NewUser::new("manu", "manu@example.com").with_active(false);
        assert!(!user.is_active);
    }
}
