//! User entity - an account that can sign in

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::RoleSet;

/// User account. Administrators and borrowers share this table and are told
/// apart by their flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub is_user: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Uuid, username: String, is_admin: bool, is_user: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            is_admin,
            is_user,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a borrower account (user role only)
    pub fn borrower(id: Uuid, username: String) -> Self {
        Self::new(id, username, false, true)
    }

    /// Roles granted to this account at login time
    pub fn roles(&self) -> RoleSet {
        RoleSet::from_flags(self.is_admin, self.is_user)
    }
}

/// A user together with its stored password hash, loaded only for login
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: User,
    pub password_hash: String,
}
