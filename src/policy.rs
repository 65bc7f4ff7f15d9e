//! Role-based visibility policy for report items.
//!
//! This module decides which items a user is permitted to see and how they
//! are annotated before rendering:
//!
//! - `ADMIN` accounts see every item, each annotated with a priority marker
//! - `USER` accounts see only items at or below [`USER_THRESHOLD`]
//! - Any other role receives the item list unchanged
//!
//! The policy is a pure function over its inputs: it produces new items and
//! never mutates the list it is given. Formatters receive only
//! policy-filtered items and perform no role checks of their own.

use crate::data::{Item, Role, User};

/// Value above which an admin-viewed item is marked as priority.
pub const PRIORITY_THRESHOLD: u64 = 1000;

/// Highest item value visible to `USER` role accounts.
pub const USER_THRESHOLD: u64 = 500;

/// Applies the visibility policy of `user` to `items`.
///
/// # Arguments
/// * `user` - The user the report is rendered for
/// * `items` - Item records in presentation order
///
/// # Returns
/// A new list containing the items the user is permitted to see, in the
/// original relative order. An empty input yields an empty output.
///
/// # Behavior
/// * `Role::Admin` - keeps every item and sets `priority` to whether its
///   value exceeds [`PRIORITY_THRESHOLD`]
/// * `Role::User` - keeps only items with values at or below
///   [`USER_THRESHOLD`]; no priority annotation is added
/// * `Role::Other` - passes the items through unchanged, with no filtering
///   and no annotation
pub fn apply(user: &User, items: &[Item]) -> Vec<Item> {
    match &user.role {
        Role::Admin => items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                item.priority = Some(item.value > PRIORITY_THRESHOLD);
                item
            })
            .collect(),
        Role::User => items
            .iter()
            .filter(|item| item.value <= USER_THRESHOLD)
            .cloned()
            .collect(),
        Role::Other(_) => items.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new(1, "Keyboard", 300),
            Item::new(2, "Workstation", 1200),
            Item::new(3, "Monitor", 500),
        ]
    }

    #[test]
    fn test_admin_keeps_every_item_with_priority_markers() {
        let admin = User::new("Alice", Role::Admin);

        let visible = apply(&admin, &sample_items());

        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].priority, Some(false));
        assert_eq!(visible[1].priority, Some(true));
        assert_eq!(visible[2].priority, Some(false));
    }

    #[test]
    fn test_admin_preserves_input_order() {
        let admin = User::new("Alice", Role::Admin);

        let visible = apply(&admin, &sample_items());
        let ids: Vec<u64> = visible.iter().map(|item| item.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_priority_threshold_is_strict() {
        let admin = User::new("Alice", Role::Admin);
        let items = vec![
            Item::new(1, "At threshold", 1000),
            Item::new(2, "Just above", 1001),
        ];

        let visible = apply(&admin, &items);

        assert_eq!(visible[0].priority, Some(false));
        assert_eq!(visible[1].priority, Some(true));
    }

    #[test]
    fn test_admin_policy_is_idempotent() {
        let admin = User::new("Alice", Role::Admin);

        let once = apply(&admin, &sample_items());
        let twice = apply(&admin, &once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_user_keeps_only_values_at_or_below_threshold() {
        let user = User::new("Carol", Role::User);

        let visible = apply(&user, &sample_items());
        let ids: Vec<u64> = visible.iter().map(|item| item.id).collect();

        // 500 is inclusive, 1200 is filtered out, relative order kept
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_user_items_gain_no_priority_marker() {
        let user = User::new("Carol", Role::User);

        let visible = apply(&user, &sample_items());

        assert!(visible.iter().all(|item| item.priority.is_none()));
    }

    #[test]
    fn test_user_threshold_boundary() {
        let user = User::new("Carol", Role::User);
        let items = vec![Item::new(1, "Kept", 500), Item::new(2, "Dropped", 501)];

        let visible = apply(&user, &items);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_unrecognized_role_passes_items_through() {
        let guest = User::new("Eve", Role::Other("GUEST".to_string()));

        let visible = apply(&guest, &sample_items());

        assert_eq!(visible, sample_items());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        for role in [Role::Admin, Role::User, Role::Other("GUEST".to_string())] {
            let user = User::new("Sam", role);
            assert!(apply(&user, &[]).is_empty());
        }
    }

    #[test]
    fn test_input_items_are_not_mutated() {
        let admin = User::new("Alice", Role::Admin);
        let items = sample_items();

        let _ = apply(&admin, &items);

        assert_eq!(items, sample_items());
    }
}
