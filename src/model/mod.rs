//! Drawer model: state shape, commands, and the container with its effects.

mod command;
mod drawer;
mod state;


pub use command::{Command, apply};
pub use drawer::Drawer;
pub use state::{
    DEFAULT_PAGE_SIZE, DrawerState, PageResult, Pagination, PaginationPatch, Params,
};
