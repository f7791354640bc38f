//! Drawer commands and the pure reducer.
//!
//! Every state change goes through [`apply`]: a command names exactly the
//! fields it replaces and touches nothing else. `apply` is copy-on-write -
//! it returns a fresh snapshot and leaves the previous one intact, so a UI
//! layer can rely on equality-based change detection.

use super::state::{DrawerState, PageResult, Pagination};

/// A single state mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<T, P> {
    /// Mark an in-flight search.
    StartLoading,
    /// Clear the in-flight mark.
    EndLoading,
    /// Replace the list and total from a completed search.
    SetData(PageResult<T>),
    /// Replace the search filters.
    SetParams(P),
    /// Replace the pagination wholesale.
    SetPagination(Pagination),
    /// Replace the current page only.
    SetPage(usize),
    /// Replace the page size only.
    SetPageSize(usize),
    /// Reset the filters to their empty value.
    ClearParams,
    /// Empty the list. Total is untouched.
    ClearList,
    /// Replace the list without touching the total.
    SetList(Vec<T>),
}

/// Apply one command to a state snapshot, producing the next snapshot.
///
/// Never performs I/O and never panics on valid input. A zero page or page
/// size would break the `>= 1` invariant and is ignored, keeping the prior
/// value.
pub fn apply<T, P>(state: &DrawerState<T, P>, command: Command<T, P>) -> DrawerState<T, P>
where
    T: Clone,
    P: Clone + Default,
{
    let mut next = state.clone();
    match command {
        Command::StartLoading => next.loading = true,
        Command::EndLoading => next.loading = false,
        Command::SetData(page) => {
            next.list = page.list;
            next.total = page.total;
        }
        Command::SetParams(params) => next.params = params,
        Command::SetPagination(pagination) => {
            if pagination.page >= 1 && pagination.page_size >= 1 {
                next.pagination = pagination;
            }
        }
        Command::SetPage(page) => {
            if page >= 1 {
                next.pagination.page = page;
            }
        }
        Command::SetPageSize(page_size) => {
            if page_size >= 1 {
                next.pagination.page_size = page_size;
            }
        }
        Command::ClearParams => next.params = P::default(),
        Command::ClearList => next.list = Vec::new(),
        Command::SetList(list) => next.list = list,
    }
    next
}
