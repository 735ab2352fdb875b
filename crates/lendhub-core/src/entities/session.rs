//! Refresh session record kept in the key-value store

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::RoleSet;

/// Identity snapshot stored behind an opaque refresh string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSession {
    pub uid: Uuid,
    pub jti: String,
    pub roles: RoleSet,
}
