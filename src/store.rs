//! Category query capability
//!
//! The dialog reads grouped categories through the [`CategoryQuery`] trait
//! rather than touching the host's store directly, so tests and the demo
//! can substitute fakes. The trait is read-only; covering itself is
//! reported back to the host through the dialog's submit callback.

use std::fs;
use std::path::Path;

use crate::error::CoverResult;
use crate::models::CategoryGroup;

/// Read-only access to the host's grouped categories
pub trait CategoryQuery {
    /// All category groups in display order, income groups included
    fn grouped(&self) -> CoverResult<Vec<CategoryGroup>>;
}

/// An owned, in-memory category store
///
/// Used by the demo binary and tests. Group data can come from literals,
/// a JSON file, or the built-in sample set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategories {
    groups: Vec<CategoryGroup>,
}

impl InMemoryCategories {
    /// Create a store over the given groups
    pub fn new(groups: Vec<CategoryGroup>) -> Self {
        Self { groups }
    }

    /// Load groups from a JSON file (an array of category groups)
    pub fn load(path: impl AsRef<Path>) -> CoverResult<Self> {
        let data = fs::read_to_string(path)?;
        let groups: Vec<CategoryGroup> = serde_json::from_str(&data)?;
        Ok(Self { groups })
    }

    /// A small sample budget for the demo binary
    pub fn sample() -> Self {
        Self::new(vec![
            CategoryGroup::new("Bills")
                .with_category("Rent")
                .with_category("Utilities")
                .with_category("Internet"),
            CategoryGroup::new("Everyday")
                .with_category("Groceries")
                .with_category("Dining Out")
                .with_category("Transport"),
            CategoryGroup::new("Income").income().with_category("Paycheck"),
        ])
    }
}

impl CategoryQuery for InMemoryCategories {
    fn grouped(&self) -> CoverResult<Vec<CategoryGroup>> {
        Ok(self.groups.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_grouped_returns_all_groups() {
        let store = InMemoryCategories::sample();
        let groups = store.grouped().unwrap();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().any(|g| g.is_income));
    }

    #[test]
    fn test_load_from_json_file() {
        let groups = vec![CategoryGroup::new("Bills").with_category("Rent")];
        let json = serde_json::to_string(&groups).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let store = InMemoryCategories::load(file.path()).unwrap();
        assert_eq!(store.grouped().unwrap(), groups);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = InMemoryCategories::load("/nonexistent/categories.json").unwrap_err();
        assert!(matches!(err, crate::CoverError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not valid").unwrap();
        let err = InMemoryCategories::load(file.path()).unwrap_err();
        assert!(matches!(err, crate::CoverError::Json(_)));
    }
}
