//! Paging-widget adapter.
//!
//! Pure derivations from drawer state to the props a pagination widget
//! needs, plus the policy for routing a widget change event to the right
//! toolkit operation: a size change drives `change_page_size`, a pure page
//! change drives `jump_page`, never both for one user action.

use crate::model::{Drawer, DrawerState};

/// Props for a paging widget, derived from drawer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    pub show_quick_jumper: bool,
    pub show_size_changer: bool,
    pub total: usize,
    pub page_size: usize,
    pub current: usize,
}

impl PagerConfig {
    pub fn from_state<T, P>(state: &DrawerState<T, P>) -> Self {
        Self {
            show_quick_jumper: true,
            show_size_changer: true,
            total: state.total,
            page_size: state.pagination.page_size,
            current: state.pagination.page,
        }
    }
}

/// The toolkit operation a widget change event maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    Jump(usize),
    Resize(usize),
}

/// Classify a widget `(page, size)` change event against the active page
/// size. A size of zero counts as "no size given" and falls through to a
/// page jump.
pub fn classify_page_change(current_page_size: usize, page: usize, size: usize) -> PageChange {
    if size != 0 && size != current_page_size {
        PageChange::Resize(size)
    } else {
        PageChange::Jump(page)
    }
}

/// Route a widget change event to the matching drawer operation.
pub async fn apply_page_change<T, P, E>(
    drawer: &Drawer<T, P, E>,
    page: usize,
    size: usize,
) -> Result<(), E>
where
    T: Clone + 'static,
    P: Clone + Default + 'static,
    E: 'static,
{
    match classify_page_change(drawer.state().pagination.page_size, page, size) {
        PageChange::Resize(size) => drawer.change_page_size(size).await,
        PageChange::Jump(page) => drawer.jump_page(page).await,
    }
}
