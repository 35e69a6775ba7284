//! Pagination module
//!
//! Supports: Offset, Page Number, "More" cursor
//!
//! # Overview
//!
//! All three addressing modes share one computation, [`Slice`], which clamps
//! a requested window `[offset, offset + limit)` into a collection of `total`
//! items and reports whether neighbouring pages exist. The modes only differ
//! in the metadata they expose:
//!
//! - offset mode reports `{size, limit, offset, total}`
//! - page mode derives `offset = page * limit` and reports `{size, limit, page, total}`
//! - more mode reports `{next, more}` where `next` is always `offset + limit`
//!
//! In offset and page mode `size` is the number of items actually returned,
//! so it shrinks on the last page.

mod modes;
mod types;

pub use modes::{more_page, numbered_page, offset_page};
pub use types::{MoreMeta, Navigation, OffsetMeta, PageMeta, PageResult, Slice};
