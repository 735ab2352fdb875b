//! Model to entity mappers
//!
//! `From<Model> for Entity` converts database rows into domain objects. Lending
//! rows go through `TryFrom` because the stored education code is range-checked.

mod business;
mod lending;
mod order;
mod product;
mod user;

pub use user::credentials_from_model;
