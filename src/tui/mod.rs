//! Terminal user interface module
//!
//! Hosts the modal stack and the cover/picker dialogs using ratatui, plus
//! the terminal setup needed by the demo binary.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod layout;
pub mod modal;
pub mod terminal;
pub mod widgets;

pub use app::App;
pub use modal::{DialogEffect, ModalOutcome, ModalRequest, ModalStack};
pub use terminal::run_demo;
