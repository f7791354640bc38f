//! The drawer container: command dispatch plus the search effects.
//!
//! A [`Drawer`] owns one [`DrawerState`] and the API function bound at
//! construction. All mutations go through [`Drawer::dispatch`], which runs
//! the pure reducer synchronously; the async toolkit operations are thin
//! wrappers over the two effects `run_search` and
//! `search_by_params_and_page`.
//!
//! Concurrency is single-threaded and cooperative: dispatch never suspends,
//! and no borrow of the state is held across the API await. Overlapping
//! searches are not cancelled - both run to completion and the one that
//! settles last writes the final list, total and loading flag.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use tracing::debug;

use super::command::{Command, apply};
use super::state::{DrawerState, PageResult, Pagination, PaginationPatch};
use crate::error::DrawerError;

type ApiFn<T, P, E> = Box<dyn Fn(Pagination, P) -> LocalBoxFuture<'static, Result<PageResult<T>, E>>>;
type ObserverFn<T, P> = Box<dyn Fn(&DrawerState<T, P>)>;

struct DrawerInner<T, P, E> {
    state: RefCell<DrawerState<T, P>>,
    api: ApiFn<T, P, E>,
    observer: RefCell<Option<ObserverFn<T, P>>>,
}

/// A paginated-list state container bound to one API function.
///
/// Cloning a `Drawer` clones a handle to the same instance; the state is
/// shared. All fetch-triggering operations resolve once their state commits
/// have been dispatched, so callers can await them to sequence UI actions,
/// and a rejection from the API function surfaces through the returned
/// `Result`.
pub struct Drawer<T, P, E = DrawerError> {
    inner: Rc<DrawerInner<T, P, E>>,
}

impl<T, P, E> Clone for Drawer<T, P, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, P, E> Drawer<T, P, E>
where
    T: Clone + 'static,
    P: Clone + Default + 'static,
    E: 'static,
{
    /// Create a drawer with default state, bound to `api`.
    ///
    /// The API function receives the target pagination and the filters for
    /// one search and resolves to one page of items plus the total count.
    pub fn new<F, Fut>(api: F) -> Self
    where
        F: Fn(Pagination, P) -> Fut + 'static,
        Fut: Future<Output = Result<PageResult<T>, E>> + 'static,
    {
        Self::with_state(api, DrawerState::default())
    }

    /// Create a drawer with an explicit initial state.
    pub fn with_state<F, Fut>(api: F, state: DrawerState<T, P>) -> Self
    where
        F: Fn(Pagination, P) -> Fut + 'static,
        Fut: Future<Output = Result<PageResult<T>, E>> + 'static,
    {
        let api: ApiFn<T, P, E> =
            Box::new(move |pagination, params| Box::pin(api(pagination, params)));
        Self {
            inner: Rc::new(DrawerInner {
                state: RefCell::new(state),
                api,
                observer: RefCell::new(None),
            }),
        }
    }

    /// Cloned snapshot of the current state.
    pub fn state(&self) -> DrawerState<T, P> {
        self.inner.state.borrow().clone()
    }

    /// Register the change observer, replacing any previous one.
    ///
    /// Called after every dispatch with the fresh snapshot. The observer
    /// must not dispatch back into the drawer.
    pub fn on_change(&self, observer: impl Fn(&DrawerState<T, P>) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Box::new(observer));
    }

    /// Run one command through the reducer and notify the observer.
    ///
    /// Commands dispatched from one call site apply in FIFO order; nothing
    /// else can interleave because dispatch never suspends.
    pub fn dispatch(&self, command: Command<T, P>) {
        let next = apply(&self.inner.state.borrow(), command);
        *self.inner.state.borrow_mut() = next;
        if let Some(observer) = self.inner.observer.borrow().as_ref() {
            observer(&self.inner.state.borrow());
        }
    }

    /// Search with new filters. The page resets to 1.
    pub async fn search(&self, params: P) -> Result<(), E> {
        self.search_by_params_and_page(params, PaginationPatch::page(1))
            .await
    }

    /// Re-run the last search: same filters, same page.
    pub async fn refresh(&self) -> Result<(), E> {
        let params = self.state().params;
        self.search_by_params_and_page(params, PaginationPatch::default())
            .await
    }

    /// Jump to a page, keeping the page size and filters.
    pub async fn jump_page(&self, page: usize) -> Result<(), E> {
        let params = self.state().params;
        self.search_by_params_and_page(params, PaginationPatch::page(page))
            .await
    }

    /// Change the page size, keeping the page and filters.
    ///
    /// The page is deliberately not reset to 1; callers that want that
    /// combine this with [`Drawer::jump_page`].
    pub async fn change_page_size(&self, page_size: usize) -> Result<(), E> {
        let params = self.state().params;
        self.search_by_params_and_page(params, PaginationPatch::page_size(page_size))
            .await
    }

    /// Search with the filters forced back to their empty value.
    pub async fn clear_params(&self) -> Result<(), E> {
        self.search(P::default()).await
    }

    /// Fetch the page after the current one. Intended for append-style
    /// mobile lists.
    pub async fn load_more(&self) -> Result<(), E> {
        let snapshot = self.state();
        let next_page = snapshot.pagination.page + 1;
        self.search_by_params_and_page(snapshot.params, PaginationPatch::page(next_page))
            .await
    }

    /// Empty the list without fetching.
    pub fn clear_list(&self) {
        self.dispatch(Command::ClearList);
    }

    /// Replace the list without fetching. The total is untouched.
    pub fn set_list(&self, list: Vec<T>) {
        self.dispatch(Command::SetList(list));
    }

    /// Merge a pagination override, commit it, then search.
    ///
    /// The merged pagination is committed to state before the fetch begins,
    /// so a paging widget reflects the target page immediately; the filters
    /// are committed only after the fetch completes, so a failed or slow
    /// search does not visibly change the active filter prematurely. A
    /// rejection propagates and leaves the filters untouched.
    pub async fn search_by_params_and_page(
        &self,
        params: P,
        patch: PaginationPatch,
    ) -> Result<(), E> {
        let merged = patch.merge_over(&self.state().pagination);
        self.dispatch(Command::SetPagination(merged));
        self.run_search(merged, params.clone()).await?;
        self.dispatch(Command::SetParams(params));
        Ok(())
    }

    /// Invoke the API function with the loading flag held.
    ///
    /// `EndLoading` is dispatched on the success and the failure path both;
    /// a rejection must never leave `loading` stuck true.
    async fn run_search(&self, pagination: Pagination, params: P) -> Result<(), E> {
        self.dispatch(Command::StartLoading);
        debug!(
            page = pagination.page,
            page_size = pagination.page_size,
            "search started"
        );
        let result = (self.inner.api)(pagination, params).await;
        let outcome = match result {
            Ok(page) => {
                debug!(count = page.list.len(), total = page.total, "search settled");
                self.dispatch(Command::SetData(page));
                Ok(())
            }
            Err(err) => {
                debug!("search failed");
                Err(err)
            }
        };
        self.dispatch(Command::EndLoading);
        outcome
    }
}
