//! Axum extractor for collection query parameters

use super::validate::validate_number;
use super::{DEFAULT_LIMIT, DEFAULT_OFFSET, DEFAULT_PAGE};
use crate::error::{Error, Result};
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

/// Query parameters exactly as they arrived on the URL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCollectionQuery {
    /// Raw `size`
    pub size: Option<String>,
    /// Raw `limit`
    pub limit: Option<String>,
    /// Raw `offset`
    pub offset: Option<String>,
    /// Raw `page`
    pub page: Option<String>,
}

/// Validated collection parameters.
///
/// Fields are `None` when the parameter was omitted; the accessors fill in
/// the shared defaults, while `size` is left to each endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionQuery {
    /// Total collection size
    pub size: Option<u64>,
    /// Page size
    pub limit: Option<u64>,
    /// Index of the first item on the page
    pub offset: Option<u64>,
    /// 0-based page number
    pub page: Option<u64>,
}

impl CollectionQuery {
    /// Validate every parameter, failing on the first bad one
    pub fn from_raw(raw: &RawCollectionQuery) -> Result<Self> {
        Ok(Self {
            size: validate_number(raw.size.as_deref())?,
            limit: validate_number(raw.limit.as_deref())?,
            offset: validate_number(raw.offset.as_deref())?,
            page: validate_number(raw.page.as_deref())?,
        })
    }

    /// Requested size, or the endpoint's default
    pub fn size_or(&self, default: u64) -> u64 {
        self.size.unwrap_or(default)
    }

    /// Requested size for endpoints that build the whole collection.
    ///
    /// A size above `max` is [`Error::InvalidNumber`].
    pub fn capped_size_or(&self, default: u64, max: u64) -> Result<u64> {
        let size = self.size_or(default);
        if size > max {
            return Err(Error::invalid_number(size.to_string()));
        }
        Ok(size)
    }

    /// Requested page size, or [`DEFAULT_LIMIT`]
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Requested offset, or [`DEFAULT_OFFSET`]
    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }

    /// Requested page, or [`DEFAULT_PAGE`]
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CollectionQuery
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let Query(raw) = Query::<RawCollectionQuery>::try_from_uri(&parts.uri)
            .map_err(|e| Error::bad_request(e.body_text()))?;

        CollectionQuery::from_raw(&raw)
    }
}
