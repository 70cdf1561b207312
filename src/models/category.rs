//! Category and CategoryGroup models
//!
//! Categories are organized into groups tagged income or expense. The cover
//! dialog treats both as read-only display data; the host application owns
//! their persistence.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryGroupId, CategoryId};

/// Display name of the synthetic unallocated-funds category
pub const TO_BE_BUDGETED_NAME: &str = "To Be Budgeted";

/// A budget category within a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// The group this category belongs to
    pub group_id: CategoryGroupId,

    /// Whether this is an income category
    #[serde(default)]
    pub is_income: bool,

    /// Whether this category is hidden in the host UI
    #[serde(default)]
    pub hidden: bool,
}

impl Category {
    /// Create a new expense category
    pub fn new(name: impl Into<String>, group_id: CategoryGroupId) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            group_id,
            is_income: false,
            hidden: false,
        }
    }

    /// The synthetic category representing unallocated funds
    pub fn to_be_budgeted() -> Self {
        Self {
            id: CategoryId::to_be_budgeted(),
            name: TO_BE_BUDGETED_NAME.into(),
            group_id: CategoryGroupId::to_be_budgeted(),
            is_income: false,
            hidden: false,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A group of related categories (e.g., "Bills", "Everyday")
///
/// Groups are a display grouping only; the dialog derives filtered copies
/// of them and never writes them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Unique identifier
    pub id: CategoryGroupId,

    /// Group name
    pub name: String,

    /// Whether this group holds income categories
    #[serde(default)]
    pub is_income: bool,

    /// The categories in this group, in display order
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CategoryGroup {
    /// Create a new empty expense group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryGroupId::new(),
            name: name.into(),
            is_income: false,
            categories: Vec::new(),
        }
    }

    /// Mark this group as an income group
    pub fn income(mut self) -> Self {
        self.is_income = true;
        self
    }

    /// Add a category to this group, fixing up its group ID
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        let mut category = Category::new(name, self.id);
        category.is_income = self.is_income;
        self.categories.push(category);
        self
    }

    /// The synthetic one-category group holding "To Be Budgeted"
    pub fn to_be_budgeted() -> Self {
        Self {
            id: CategoryGroupId::to_be_budgeted(),
            name: TO_BE_BUDGETED_NAME.into(),
            is_income: false,
            categories: vec![Category::to_be_budgeted()],
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_category_links_group() {
        let group = CategoryGroup::new("Bills").with_category("Rent");
        assert_eq!(group.categories.len(), 1);
        assert_eq!(group.categories[0].group_id, group.id);
        assert!(!group.categories[0].is_income);
    }

    #[test]
    fn test_income_group_marks_categories() {
        let group = CategoryGroup::new("Income").income().with_category("Paycheck");
        assert!(group.is_income);
        assert!(group.categories[0].is_income);
    }

    #[test]
    fn test_to_be_budgeted_group_shape() {
        let group = CategoryGroup::to_be_budgeted();
        assert!(!group.is_income);
        assert_eq!(group.categories.len(), 1);
        assert!(group.categories[0].id.is_to_be_budgeted());
        assert_eq!(group.categories[0].name, TO_BE_BUDGETED_NAME);
    }

    #[test]
    fn test_group_json_round_trip() {
        let group = CategoryGroup::new("Everyday")
            .with_category("Groceries")
            .with_category("Dining Out");
        let json = serde_json::to_string(&group).unwrap();
        let back: CategoryGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(group, back);
    }
}
