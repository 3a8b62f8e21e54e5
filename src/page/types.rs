//! Page type and derived pagination values

use crate::error::{Error, Result};
use crate::record::Record;

/// One fetched window of a collection
///
/// `limit`, `offset` and `total` arrive as signed integers on the wire and
/// are validated once, here. `total` is a server hint and is never checked
/// against the number of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T = Record> {
    limit: u64,
    offset: u64,
    has_more: bool,
    total: Option<u64>,
    items: Vec<T>,
}

impl<T> Page<T> {
    /// Construct a page, rejecting negative `limit`, `offset` or `total`
    pub fn new(
        limit: i64,
        offset: i64,
        has_more: bool,
        total: Option<i64>,
        items: Vec<T>,
    ) -> Result<Self> {
        let limit = u64::try_from(limit)
            .map_err(|_| Error::validation(format!("limit cannot be negative, got {limit}")))?;
        let offset = u64::try_from(offset)
            .map_err(|_| Error::validation(format!("offset cannot be negative, got {offset}")))?;
        let total = total
            .map(|t| {
                u64::try_from(t)
                    .map_err(|_| Error::validation(format!("total cannot be negative, got {t}")))
            })
            .transpose()?;

        Ok(Self {
            limit,
            offset,
            has_more,
            total,
            items,
        })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Whether the server reported more data after this window
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Server-reported collection size, when known
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and take ownership of its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    /// Offset of the window that follows this one
    pub fn next_offset(&self) -> u64 {
        self.offset + self.limit
    }

    /// Offset of the preceding window, clamped at zero
    pub fn previous_offset(&self) -> u64 {
        self.offset.saturating_sub(self.limit)
    }

    /// 1-based page number of this window
    ///
    /// A zero limit is a division by zero and is reported as an error rather
    /// than mapped to a default.
    pub fn current_page_number(&self) -> Result<u64> {
        if self.limit == 0 {
            return Err(Error::validation(
                "cannot compute page number: division by zero (limit is 0)",
            ));
        }
        Ok(self.offset / self.limit + 1)
    }

    /// `ceil(total / limit)` when both are known and the limit is positive
    pub fn estimated_total_pages(&self) -> Option<u64> {
        match (self.total, self.limit) {
            (Some(total), limit) if limit > 0 => Some(total.div_ceil(limit)),
            _ => None,
        }
    }

    /// One-line description for log output
    pub fn pagination_summary(&self) -> String {
        format!(
            "offset={}, limit={}, count={}, more={}, total={}",
            self.offset,
            self.limit,
            self.items.len(),
            self.has_more,
            self.total
                .map_or_else(|| "unknown".to_string(), |t| t.to_string())
        )
    }
}
