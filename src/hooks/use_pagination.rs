use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::model::{Drawer, DrawerState};
use crate::pagination::{PagerConfig, apply_page_change};

/// Return type for the use_pagination hook.
pub struct UsePaginationReturn {
    /// Widget props derived from the drawer state.
    pub config: Signal<PagerConfig, LocalStorage>,
    /// `(page, size)` change handler. A size differing from the active
    /// page size drives `change_page_size`, anything else is a page jump;
    /// never both for one event.
    pub on_change: UnsyncCallback<(usize, usize)>,
}

/// Hook deriving paging-widget props from a drawer.
///
/// # Example
/// ```rust,ignore
/// let drawer = use_drawer(api);
/// let pager = use_pagination(drawer.state, &drawer.drawer);
///
/// view! {
///     <Pager
///         current=move || pager.config.get().current
///         total=move || pager.config.get().total
///         on_change=pager.on_change
///     />
/// }
/// ```
pub fn use_pagination<T, P, E>(
    state: ReadSignal<DrawerState<T, P>, LocalStorage>,
    drawer: &Drawer<T, P, E>,
) -> UsePaginationReturn
where
    T: Clone + 'static,
    P: Clone + Default + 'static,
    E: 'static,
{
    let config = Signal::derive_local(move || PagerConfig::from_state(&state.get()));

    let on_change = UnsyncCallback::new({
        let drawer = drawer.clone();
        move |(page, size): (usize, usize)| {
            let drawer = drawer.clone();
            spawn_local(async move {
                let _ = apply_page_change(&drawer, page, size).await;
            });
        }
    });

    UsePaginationReturn { config, on_change }
}
