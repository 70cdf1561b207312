//! cover-modal - "Cover overspending" dialog for a terminal budgeting client
//!
//! This crate implements the modal flow used to cover a category's deficit
//! from another category's balance: a dialog showing a tappable "cover from"
//! field, a nested category-autocomplete picker, and a confirm action that
//! reports the chosen source category to the caller.
//!
//! # Architecture
//!
//! - `error`: Custom error types
//! - `models`: Category and category-group data models
//! - `store`: Read-only category query capability and an in-memory store
//! - `budget`: Pure list transforms that derive the selectable category set
//! - `tui`: The modal stack, dialogs, and terminal plumbing (ratatui)
//!
//! The dialog never owns budgeting business logic. It reads grouped
//! categories through an injected [`store::CategoryQuery`], and hands the
//! selected [`models::CategoryId`] back through a caller-supplied callback.

pub mod budget;
pub mod error;
pub mod models;
pub mod store;
pub mod tui;

pub use error::{CoverError, CoverResult};
pub use models::{Category, CategoryGroup, CategoryId};
