//! Drawer state shape.
//!
//! One `DrawerState` value exists per drawer instance. It is only ever
//! replaced wholesale through command dispatch (see `command.rs`); callers
//! receive cloned snapshots and never mutate shared state in place.

/// Page size used when a drawer is created without an explicit one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Convenience alias for map-shaped search filters.
///
/// Any `Clone + Default` type works as the params slot; this alias covers
/// the common "field name to JSON value" case.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// 1-based paging position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Per-field pagination override.
///
/// Unset fields keep the current value. Invalid fields (a zero page or
/// page size) are dropped rather than rejected, so the merged result
/// always satisfies `page >= 1` and `page_size >= 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationPatch {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl PaginationPatch {
    /// Override the page only.
    pub fn page(page: usize) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Override the page size only.
    pub fn page_size(page_size: usize) -> Self {
        Self {
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    /// Merge this patch over the current pagination, patch fields winning.
    pub fn merge_over(&self, current: &Pagination) -> Pagination {
        Pagination {
            page: self.page.filter(|page| *page >= 1).unwrap_or(current.page),
            page_size: self
                .page_size
                .filter(|size| *size >= 1)
                .unwrap_or(current.page_size),
        }
    }
}

/// What a drawer API function resolves to: one page of items plus the
/// total count across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    pub list: Vec<T>,
    pub total: usize,
}

/// Full state of one paginated list.
///
/// `list` and `total` reflect the most recently completed search; `params`
/// the filters of the most recently completed search; `pagination` the
/// target page, committed before the fetch starts so paging widgets can
/// reflect it immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerState<T, P> {
    pub list: Vec<T>,
    pub loading: bool,
    pub total: usize,
    pub params: P,
    pub pagination: Pagination,
}

impl<T, P: Default> Default for DrawerState<T, P> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            loading: false,
            total: 0,
            params: P::default(),
            pagination: Pagination::default(),
        }
    }
}
