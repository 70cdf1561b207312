//! Dialog modules for the modal stack
//!
//! Each dialog owns its local state, renders itself into a centered popup,
//! and reports what the stack should do next through a
//! [`DialogEffect`](crate::tui::modal::DialogEffect).

pub mod category_picker;
pub mod cover;

pub use category_picker::{CategoryPicker, PickerProps};
pub use cover::{CoverModal, CoverProps};
