use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Raw `page`/`limit` query parameters as sent by clients.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageQuery {
    pub fn normalize(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }
}

/// A validated page request: `page >= 1`, `1 <= limit <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(page) if page >= 1 => page as u64,
            _ => 1,
        };
        let limit = match limit {
            Some(limit) if limit >= 1 && limit as u64 <= MAX_PAGE_SIZE => limit as u64,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, limit }
    }

    /// Saturates instead of overflowing for absurd page numbers.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }

    pub fn has_next(&self, total: u64) -> bool {
        self.page < self.total_pages(total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Pagination::new(Some(0), Some(0)), Pagination { page: 1, limit: 10 });
        assert_eq!(Pagination::new(Some(-3), Some(101)), Pagination { page: 1, limit: 10 });
        assert_eq!(Pagination::new(Some(4), Some(100)), Pagination { page: 4, limit: 100 });
    }

    #[test]
    fn computes_offsets_and_page_counts() {
        let pagination = Pagination::new(Some(3), Some(20));
        assert_eq!(pagination.offset(), 40);
        assert_eq!(pagination.total_pages(41), 3);
        assert_eq!(pagination.total_pages(0), 0);
        assert!(!pagination.has_next(41));
        assert!(pagination.has_next(61));
        assert!(pagination.has_previous());
    }

    #[test]
    fn huge_page_saturates_offset() {
        let pagination = PageQuery {
            page: Some(i64::MAX),
            limit: Some(100),
        }
        .normalize();
        assert_eq!(pagination.offset(), u64::MAX);
        assert!(!pagination.has_next(50));
        assert!(pagination.has_previous());
    }
}
