use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::DrawerError;
use crate::model::{Drawer, DrawerState, PageResult, Pagination};

/// Caller-facing operations bound to one drawer instance.
///
/// Every fetch-triggering callback spawns the matching drawer operation;
/// use the [`Drawer`] handle from [`UseDrawerReturn`] instead when a call
/// site needs to await completion or observe the rejection itself.
pub struct Toolkit<T: 'static, P: 'static> {
    /// Search with new filters. Resets to page 1.
    pub search: UnsyncCallback<P>,
    /// Re-run the last search unchanged.
    pub refresh: UnsyncCallback<()>,
    /// Jump to a page.
    pub jump_page: UnsyncCallback<usize>,
    /// Change the page size. The page is not reset.
    pub change_page_size: UnsyncCallback<usize>,
    /// Search with the filters forced back to empty.
    pub clear_params: UnsyncCallback<()>,
    /// Fetch the next page, for append-style lists.
    pub load_more: UnsyncCallback<()>,
    /// Empty the list without fetching.
    pub clear_list: UnsyncCallback<()>,
    /// Replace the list without fetching.
    pub set_list: UnsyncCallback<Vec<T>>,
}

/// Return type for the use_drawer hook.
pub struct UseDrawerReturn<T: 'static, P: 'static, E: 'static = DrawerError> {
    /// Reactive snapshot of the drawer state, updated on every dispatch.
    pub state: ReadSignal<DrawerState<T, P>, LocalStorage>,
    /// Spawning callbacks over the drawer operations.
    pub toolkit: Toolkit<T, P>,
    /// The underlying container, for await-style sequencing.
    pub drawer: Drawer<T, P, E>,
}

/// Hook for managing paginated list state bound to one API function.
///
/// # Example
/// ```rust,ignore
/// let drawer = use_drawer(|pagination, params: UserFilter| {
///     api::users::page(pagination, params)
/// });
///
/// view! {
///     <UserTable rows=move || drawer.state.get().list/>
///     <Button on:click=move |_| drawer.toolkit.refresh.run(())>"Reload"</Button>
/// }
/// ```
pub fn use_drawer<T, P, E, F, Fut>(api: F) -> UseDrawerReturn<T, P, E>
where
    T: Clone + 'static,
    P: Clone + Default + 'static,
    E: 'static,
    F: Fn(Pagination, P) -> Fut + 'static,
    Fut: Future<Output = Result<PageResult<T>, E>> + 'static,
{
    use_drawer_with_on_error(api, None)
}

/// Like [`use_drawer`], with rejections from spawned callbacks forwarded
/// to `on_error` instead of being dropped.
pub fn use_drawer_with_on_error<T, P, E, F, Fut>(
    api: F,
    on_error: Option<UnsyncCallback<E>>,
) -> UseDrawerReturn<T, P, E>
where
    T: Clone + 'static,
    P: Clone + Default + 'static,
    E: 'static,
    F: Fn(Pagination, P) -> Fut + 'static,
    Fut: Future<Output = Result<PageResult<T>, E>> + 'static,
{
    let drawer: Drawer<T, P, E> = Drawer::new(api);

    let (state, set_state) = signal_local(drawer.state());
    drawer.on_change(move |snapshot| set_state.set(snapshot.clone()));

    let report = move |result: Result<(), E>, on_error: &Option<UnsyncCallback<E>>| {
        if let (Err(err), Some(on_error)) = (result, on_error) {
            on_error.run(err);
        }
    };

    let search = UnsyncCallback::new({
        let drawer = drawer.clone();
        let on_error = on_error.clone();
        move |params: P| {
            let drawer = drawer.clone();
            let on_error = on_error.clone();
            spawn_local(async move { report(drawer.search(params).await, &on_error) });
        }
    });
    let refresh = UnsyncCallback::new({
        let drawer = drawer.clone();
        let on_error = on_error.clone();
        move |()| {
            let drawer = drawer.clone();
            let on_error = on_error.clone();
            spawn_local(async move { report(drawer.refresh().await, &on_error) });
        }
    });
    let jump_page = UnsyncCallback::new({
        let drawer = drawer.clone();
        let on_error = on_error.clone();
        move |page: usize| {
            let drawer = drawer.clone();
            let on_error = on_error.clone();
            spawn_local(async move { report(drawer.jump_page(page).await, &on_error) });
        }
    });
    let change_page_size = UnsyncCallback::new({
        let drawer = drawer.clone();
        let on_error = on_error.clone();
        move |page_size: usize| {
            let drawer = drawer.clone();
            let on_error = on_error.clone();
            spawn_local(async move { report(drawer.change_page_size(page_size).await, &on_error) });
        }
    });
    let clear_params = UnsyncCallback::new({
        let drawer = drawer.clone();
        let on_error = on_error.clone();
        move |()| {
            let drawer = drawer.clone();
            let on_error = on_error.clone();
            spawn_local(async move { report(drawer.clear_params().await, &on_error) });
        }
    });
    let load_more = UnsyncCallback::new({
        let drawer = drawer.clone();
        let on_error = on_error.clone();
        move |()| {
            let drawer = drawer.clone();
            let on_error = on_error.clone();
            spawn_local(async move { report(drawer.load_more().await, &on_error) });
        }
    });
    let clear_list = UnsyncCallback::new({
        let drawer = drawer.clone();
        move |()| drawer.clear_list()
    });
    let set_list = UnsyncCallback::new({
        let drawer = drawer.clone();
        move |list: Vec<T>| drawer.set_list(list)
    });

    UseDrawerReturn {
        state,
        toolkit: Toolkit {
            search,
            refresh,
            jump_page,
            change_page_size,
            clear_params,
            load_more,
            clear_list,
            set_list,
        },
        drawer,
    }
}
