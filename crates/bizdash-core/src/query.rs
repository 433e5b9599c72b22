//! Per-view pagination and search state.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination, search text and fetch flags for one list view.
///
/// Created when a view mounts and dropped with it. Mutations that change the
/// filter criteria (search text, page size) send the view back to page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    page: u32,
    size: u32,
    search: String,
    loading: bool,
    has_more: bool,
}

/// Request parameters handed to a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

impl QueryParams {
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.size as usize
    }
}

impl QueryState {
    /// A size of zero falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn new(size: u32) -> Self {
        Self {
            page: 1,
            size: if size == 0 { DEFAULT_PAGE_SIZE } else { size },
            search: String::new(),
            loading: false,
            has_more: false,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
        tracing::debug!(search = %self.search, "query search changed");
    }

    /// Jump to page `n`. Pages below 1 are ignored without error.
    ///
    /// Like [`prev_page`](Self::prev_page) this is explicit navigation and
    /// may move backwards; fetch transitions never touch the page.
    pub fn set_page(&mut self, n: i64) {
        if n < 1 {
            tracing::debug!(requested = n, "ignoring out-of-range page");
            return;
        }
        self.page = u32::try_from(n).unwrap_or(u32::MAX);
    }

    /// Change the page size. Zero is ignored.
    pub fn set_size(&mut self, size: u32) {
        if size == 0 {
            return;
        }
        self.size = size;
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.page = 1;
    }

    /// Advance one page if the source reported more rows and nothing is in flight.
    pub fn next_page(&mut self) -> bool {
        if !self.has_more || self.loading {
            return false;
        }
        self.page = self.page.saturating_add(1);
        true
    }

    /// Step back one page, stopping at page 1.
    ///
    /// Callers use this for user navigation and to recover when a delete
    /// empties the last page. Fetches never move the page backwards.
    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    pub fn finish_fetch(&mut self, has_more: bool) {
        self.loading = false;
        self.has_more = has_more;
    }

    pub fn fail_fetch(&mut self) {
        self.loading = false;
        self.has_more = false;
    }

    pub fn offset(&self) -> usize {
        self.params().offset()
    }

    pub fn params(&self) -> QueryParams {
        QueryParams {
            page: self.page,
            size: self.size,
            search: self.search.clone(),
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
