//! Query parameter validation
//!
//! Untrusted numeric query parameters are parsed into small non-negative
//! integers. Absent parameters stay `None` so each endpoint can apply its own
//! default; anything that is not a non-negative integer is rejected.
//!
//! # Overview
//!
//! - [`validate_number`] is the pure validation contract.
//! - [`CollectionQuery`] is the axum extractor that runs it over
//!   `size`, `limit`, `offset` and `page`.

mod extract;
mod validate;

pub use extract::{CollectionQuery, RawCollectionQuery};
pub use validate::validate_number;

/// Default collection size for the paginated endpoints
pub const DEFAULT_SIZE: u64 = 25;

/// Default page size
pub const DEFAULT_LIMIT: u64 = 5;

/// Default offset
pub const DEFAULT_OFFSET: u64 = 0;

/// Default page number (0-based)
pub const DEFAULT_PAGE: u64 = 0;

#[cfg(test)]
mod tests;
