//! Paginated list-fetching state for reactive UIs.
//!
//! The core is the [`Drawer`]: a caller-owned container holding
//! `{list, loading, total, params, pagination}` for one paginated list,
//! mutated only through an explicit command/reducer model and driven by
//! async search effects bound to a single API function. The `transform`
//! module adapts arbitrary paged backend shapes to the drawer's
//! `{list, total}` contract, and `pagination` derives paging-widget props
//! from drawer state.
//!
//! With the `frontend` feature the `hooks` module binds a drawer to Leptos
//! signals and exposes the toolkit as callbacks.

pub mod error;
pub mod model;
pub mod pagination;
pub mod transform;

#[cfg(feature = "frontend")]
pub mod hooks;

pub use error::DrawerError;
pub use model::{
    Command, DEFAULT_PAGE_SIZE, Drawer, DrawerState, PageResult, Pagination, PaginationPatch,
    Params, apply,
};
pub use pagination::{PageChange, PagerConfig, apply_page_change, classify_page_change};
pub use transform::{
    PageEnvelope, SplitRequest, common_response_handler, drawer_api_handler, split_request_handler,
};
