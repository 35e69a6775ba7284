//! Addressing mode implementations
//!
//! Each mode wraps the shared [`Slice`] computation and shapes its metadata.

use super::types::{MoreMeta, OffsetMeta, PageMeta, PageResult, Slice};

// ============================================================================
// Offset Mode
// ============================================================================

/// Offset-addressed page (e.g. `?offset=10&limit=5`)
pub fn offset_page(total: u64, offset: u64, limit: u64, label: &str) -> PageResult<'_, OffsetMeta> {
    let slice = Slice::new(total, offset, limit);
    PageResult {
        items: slice.items(label),
        pagination: OffsetMeta {
            size: slice.visible_count(),
            limit,
            offset,
            total,
        },
    }
}

// ============================================================================
// Page Number Mode
// ============================================================================

/// Page-addressed page (e.g. `?page=2&limit=5`), pages are 0-based
pub fn numbered_page(total: u64, page: u64, limit: u64, label: &str) -> PageResult<'_, PageMeta> {
    let slice = Slice::new(total, page.saturating_mul(limit), limit);
    PageResult {
        items: slice.items(label),
        pagination: PageMeta {
            size: slice.visible_count(),
            limit,
            page,
            total,
        },
    }
}

// ============================================================================
// More Mode
// ============================================================================

/// Cursor-like page exposing only the next offset and a continuation flag
pub fn more_page(total: u64, offset: u64, limit: u64, label: &str) -> PageResult<'_, MoreMeta> {
    let slice = Slice::new(total, offset, limit);
    PageResult {
        items: slice.items(label),
        pagination: MoreMeta {
            next: slice.following_offset(),
            more: slice.has_next(),
        },
    }
}
