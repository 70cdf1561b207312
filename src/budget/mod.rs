//! Budget display helpers
//!
//! Pure transforms over category groups used by the cover dialog.

pub mod util;

pub use util::{
    add_to_be_budgeted_group, cover_candidates, flatten_groups, remove_categories_from_groups,
};
