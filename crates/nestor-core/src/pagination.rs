//! Pagination over collection endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters from query strings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page", rename = "pageSize")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    /// Clamp to sane bounds; page numbering starts at 1
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> usize {
        ((self.page.max(1) - 1) * self.per_page) as usize
    }
}

/// A page of results with count metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Paginated<T> {
    /// Slice a full result set down to the requested page
    pub fn from_vec(items: Vec<T>, params: PaginationParams) -> Self {
        let params = params.normalized();
        let total = items.len();
        let offset = params.offset();

        let items = if offset >= total {
            Vec::new()
        } else {
            items
                .into_iter()
                .skip(offset)
                .take(params.per_page as usize)
                .collect()
        };

        Self {
            items,
            total,
            page: params.page,
            page_size: params.per_page,
        }
    }
}
