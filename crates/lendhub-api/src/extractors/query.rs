//! Query string extractors
//!
//! Record identifiers and search terms travel in the query string
//! (`?id=`, `?q=`, `?filename=`). Bad values become `400` JSON errors.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

#[derive(Deserialize)]
struct IdParams {
    id: Option<String>,
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Deserialize)]
struct FileNameParams {
    filename: Option<String>,
}

fn parse<T: for<'de> Deserialize<'de>>(parts: &Parts) -> Result<T, ApiError> {
    Query::<T>::try_from_uri(&parts.uri)
        .map(|Query(params)| params)
        .map_err(|_| ApiError::bad_request("invalid query string"))
}

/// `?id=<uuid>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdQuery(pub Uuid);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for IdQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params: IdParams = parse(parts)?;
        let raw = params.id.ok_or_else(|| ApiError::bad_request("id is required"))?;
        Uuid::parse_str(&raw)
            .map(IdQuery)
            .map_err(|_| ApiError::bad_request("invalid id"))
    }
}

/// `?q=<term>`; absent means match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for SearchQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params: SearchParams = parse(parts)?;
        Ok(SearchQuery(params.q.unwrap_or_default()))
    }
}

/// `?filename=<blob name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameQuery(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for FileNameQuery {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params: FileNameParams = parse(parts)?;
        params
            .filename
            .filter(|name| !name.is_empty())
            .map(FileNameQuery)
            .ok_or_else(|| ApiError::bad_request("filename is required"))
    }
}
