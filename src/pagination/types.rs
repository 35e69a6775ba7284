//! Pagination types
//!
//! Defines the shared slice computation and the per-mode metadata records.

use crate::collection::{generate_range, SyntheticItem};
use serde::Serialize;
use std::ops::Range;

/// A requested window into a collection of `total` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    /// Number of items in the whole collection
    pub total: u64,
    /// Requested offset, unclamped
    pub offset: u64,
    /// Requested page size
    pub limit: u64,
}

impl Slice {
    /// Create a new slice
    pub fn new(total: u64, offset: u64, limit: u64) -> Self {
        Self {
            total,
            offset,
            limit,
        }
    }

    /// First visible position, clamped into `[0, total]`
    pub fn start(&self) -> u64 {
        self.offset.min(self.total)
    }

    /// One past the last visible position
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.limit).min(self.total)
    }

    /// Visible positions as a range
    pub fn range(&self) -> Range<u64> {
        let start = self.start();
        start..self.end().max(start)
    }

    /// Number of items actually returned
    pub fn visible_count(&self) -> u64 {
        self.end().saturating_sub(self.start())
    }

    /// Is there a page before this one?
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// Is there a page after this one?
    pub fn has_next(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }

    /// Offset of the following window, regardless of whether it holds data
    pub fn following_offset(&self) -> u64 {
        self.offset.saturating_add(self.limit)
    }

    /// Navigation offsets, present only when the neighbouring page exists
    pub fn navigation(&self) -> Navigation {
        Navigation {
            previous: self
                .has_previous()
                .then(|| self.offset.saturating_sub(self.limit)),
            next: self.has_next().then(|| self.following_offset()),
        }
    }

    /// Generate the visible items
    pub fn items<'a>(&self, label: &'a str) -> Vec<SyntheticItem<'a>> {
        generate_range(self.range(), label)
    }
}

/// Offsets of the neighbouring pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    /// `max(0, offset - limit)` when `offset > 0`
    pub previous: Option<u64>,
    /// `offset + limit` when that is still inside the collection
    pub next: Option<u64>,
}

/// Offset-mode metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OffsetMeta {
    /// Items on this page
    pub size: u64,
    /// Requested page size
    pub limit: u64,
    /// Requested offset
    pub offset: u64,
    /// Items in the whole collection
    pub total: u64,
}

/// Page-mode metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Items on this page
    pub size: u64,
    /// Requested page size
    pub limit: u64,
    /// Requested 0-based page number
    pub page: u64,
    /// Items in the whole collection
    pub total: u64,
}

/// "More" cursor metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoreMeta {
    /// Arithmetic next offset, even past the end
    pub next: u64,
    /// The only boundary-correct continuation flag
    pub more: bool,
}

/// Items plus the metadata of whichever mode produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<'a, M> {
    /// Visible items
    pub items: Vec<SyntheticItem<'a>>,
    /// Mode-specific navigation
    pub pagination: M,
}
