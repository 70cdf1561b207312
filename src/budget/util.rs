//! Derivation of the selectable category set
//!
//! The cover dialog never shows raw store data. Its selectable set is a
//! pure function of the grouped categories, the category being covered, and
//! whether unallocated funds may be used as a source. Keeping these
//! transforms free of dialog state makes them directly testable and cheap
//! enough to recompute whenever the inputs change.

use crate::models::{Category, CategoryGroup, CategoryId};

/// Prepend the synthetic "To Be Budgeted" group to a group list
pub fn add_to_be_budgeted_group(groups: Vec<CategoryGroup>) -> Vec<CategoryGroup> {
    let mut out = Vec::with_capacity(groups.len() + 1);
    out.push(CategoryGroup::to_be_budgeted());
    out.extend(groups);
    out
}

/// Remove one category from every group, dropping groups left empty
pub fn remove_categories_from_groups(
    groups: Vec<CategoryGroup>,
    id: CategoryId,
) -> Vec<CategoryGroup> {
    groups
        .into_iter()
        .filter_map(|mut group| {
            group.categories.retain(|c| c.id != id);
            if group.categories.is_empty() {
                None
            } else {
                Some(group)
            }
        })
        .collect()
}

/// Flatten groups into a single candidate list, in display order
pub fn flatten_groups(groups: &[CategoryGroup]) -> Vec<Category> {
    groups
        .iter()
        .flat_map(|g| g.categories.iter().cloned())
        .collect()
}

/// Derive the selectable set for a cover operation.
///
/// Starting from all groups: drop income groups, optionally prepend the
/// synthetic "To Be Budgeted" group, and remove the category being covered
/// so it can never cover itself. Returns the filtered groups (seed for the
/// picker) alongside their flattened form (for id-to-name lookup).
pub fn cover_candidates(
    groups: Vec<CategoryGroup>,
    exclude: Option<CategoryId>,
    show_to_be_budgeted: bool,
) -> (Vec<CategoryGroup>, Vec<Category>) {
    let expense_groups: Vec<CategoryGroup> =
        groups.into_iter().filter(|g| !g.is_income).collect();

    let groups = if show_to_be_budgeted {
        add_to_be_budgeted_group(expense_groups)
    } else {
        expense_groups
    };

    let groups = match exclude {
        Some(id) => remove_categories_from_groups(groups, id),
        None => groups,
    };

    let flattened = flatten_groups(&groups);
    (groups, flattened)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_groups() -> Vec<CategoryGroup> {
        vec![
            CategoryGroup::new("Everyday")
                .with_category("Groceries")
                .with_category("Dining Out"),
            CategoryGroup::new("Income").income().with_category("Paycheck"),
        ]
    }

    fn id_of(groups: &[CategoryGroup], name: &str) -> CategoryId {
        groups
            .iter()
            .flat_map(|g| g.categories.iter())
            .find(|c| c.name == name)
            .map(|c| c.id)
            .unwrap()
    }

    #[test]
    fn test_income_groups_always_dropped() {
        let groups = sample_groups();
        let (filtered, flat) = cover_candidates(groups, None, false);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.iter().all(|g| !g.is_income));
        assert!(flat.iter().all(|c| !c.is_income));
    }

    #[test]
    fn test_excluded_category_never_selectable() {
        let groups = sample_groups();
        let dining = id_of(&groups, "Dining Out");
        let (_, flat) = cover_candidates(groups, Some(dining), true);
        assert!(flat.iter().all(|c| c.id != dining));
    }

    #[test]
    fn test_exactly_one_synthetic_entry_when_enabled() {
        let groups = sample_groups();
        let (_, flat) = cover_candidates(groups.clone(), None, true);
        assert_eq!(flat.iter().filter(|c| c.id.is_to_be_budgeted()).count(), 1);

        let (_, flat) = cover_candidates(groups, None, false);
        assert_eq!(flat.iter().filter(|c| c.id.is_to_be_budgeted()).count(), 0);
    }

    #[test]
    fn test_exclude_with_no_synthetic_group() {
        // groups = [expense {a, b}, income {c}], exclude b, no synthetic
        // entry: the selectable flattened list is exactly [a]
        let groups = sample_groups();
        let a = id_of(&groups, "Groceries");
        let b = id_of(&groups, "Dining Out");
        let (filtered, flat) = cover_candidates(groups, Some(b), false);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].id, a);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_no_exclude_with_synthetic_group() {
        // Same groups, no exclusion, synthetic entry on: the flattened list
        // is [to-be-budgeted, a, b], income group still excluded
        let groups = sample_groups();
        let a = id_of(&groups, "Groceries");
        let b = id_of(&groups, "Dining Out");
        let (_, flat) = cover_candidates(groups, None, true);
        assert_eq!(flat.len(), 3);
        assert!(flat[0].id.is_to_be_budgeted());
        assert_eq!(flat[1].id, a);
        assert_eq!(flat[2].id, b);
    }

    #[test]
    fn test_dangling_exclude_yields_unfiltered_list() {
        let groups = sample_groups();
        let dangling = CategoryId::new();
        let (_, flat) = cover_candidates(groups.clone(), Some(dangling), false);
        let (_, unfiltered) = cover_candidates(groups, None, false);
        assert_eq!(flat, unfiltered);
    }

    #[test]
    fn test_groups_left_empty_are_dropped() {
        let groups = vec![CategoryGroup::new("Solo").with_category("Only")];
        let only = id_of(&groups, "Only");
        let filtered = remove_categories_from_groups(groups, only);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_synthetic_group_sits_first() {
        let groups = add_to_be_budgeted_group(sample_groups());
        assert_eq!(groups[0].name, crate::models::category::TO_BE_BUDGETED_NAME);
        assert_eq!(groups.len(), 3);
    }
}
