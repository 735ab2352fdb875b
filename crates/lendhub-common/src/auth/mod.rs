//! Authentication utilities

mod jwt;
mod password;
mod random;

pub use jwt::{Claims, JwtService};
pub use password::{hash_password, verify_password};
pub use random::{generate_refresh_string, generate_token_id};
