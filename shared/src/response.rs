//! API response types
//!
//! List endpoints return a page envelope; query parameters are serialised
//! only when set, so an absent filter means "no constraint".

use serde::{Deserialize, Serialize};

/// Paginated response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Items on this page
    pub data: Vec<T>,
    /// Total number of items
    #[serde(default)]
    pub total: u64,
    /// Current page number (1-based)
    #[serde(default = "first_page")]
    pub page: u32,
    /// Items per page
    #[serde(default)]
    pub limit: u32,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Paginated<T> {
    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Plain paging query (`page`, `limit`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PageQuery {
    /// Request a specific page
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}
