//! Data models for the cover dialog
//!
//! Categories and category groups are owned by the host application; this
//! crate only reads them. The models here carry the fields the dialog needs
//! (id, name, income flag) and stay opaque beyond that.

pub mod category;
pub mod ids;

pub use category::{Category, CategoryGroup};
pub use ids::{CategoryGroupId, CategoryId};
