//! Reusable widgets for the dialog layer

pub mod field;
pub mod input;

pub use field::{button_row, field_label, tap_field};
pub use input::SearchInput;
