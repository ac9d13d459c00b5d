//! Shared presentational components and form-state helpers for the café
//! admin workspace.

mod forms;
pub use forms::{ActionButton, ButtonKind, SelectField, TextField};

mod table;
pub use table::{page_count, page_slice, DataTable, Paginator};

mod navbar;
pub use navbar::Navbar;

pub mod validate;

mod confirm;
pub use confirm::{alert, can_discard, confirm, use_dirty_flag};
