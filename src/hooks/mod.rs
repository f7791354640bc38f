//! Leptos hooks binding a drawer to reactive signals.

mod use_drawer;
mod use_pagination;

pub use use_drawer::*;
pub use use_pagination::*;
