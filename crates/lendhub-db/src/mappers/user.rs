//! User model -> entity mapper

use lendhub_core::entities::{Credentials, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            is_admin: model.is_admin,
            is_user: model.is_user,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split a user row into the entity and its password hash
pub fn credentials_from_model(mut model: UserModel) -> Credentials {
    let password_hash = std::mem::take(&mut model.password_hash);
    Credentials {
        user: User::from(model),
        password_hash,
    }
}
