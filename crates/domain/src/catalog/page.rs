use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    #[serde(default)]
    pub page_num: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> PageResult<T> {
    /// An empty page echoing the requested position.
    #[must_use]
    pub const fn empty(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
            total: 0,
            pages: 0,
            list: Vec::new(),
        }
    }

    /// Fills zero page fields from the request that produced this page.
    #[must_use]
    pub fn or_requested(mut self, page_num: u32, page_size: u32) -> Self {
        if self.page_num == 0 {
            self.page_num = page_num;
        }
        if self.page_size == 0 {
            self.page_size = page_size;
        }
        self
    }
}
