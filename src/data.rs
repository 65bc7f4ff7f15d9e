//! Data structures for report items and requesting users.
//!
//! This module defines the core data structures used throughout the `ruport`
//! application: the line items a report is made of and the user the report
//! is rendered for.

use serde::{Deserialize, Serialize};

/// A single line item of a report.
///
/// # Fields
/// * `id` - Numeric identifier of the item
/// * `name` - Display name of the item
/// * `value` - Numeric value of the item, summed into the report total
/// * `priority` - Derived marker set by the admin visibility pass; absent
///   (`None`) until a policy pass annotates the item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub value: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<bool>,
}

impl Item {
    /// Creates an item with no priority annotation.
    ///
    /// `priority` is never supplied by callers; it is derived by the
    /// visibility policy for admin-viewed items.
    pub fn new(id: u64, name: impl Into<String>, value: u64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            priority: None,
        }
    }
}

/// The user a report is rendered for.
///
/// # Fields
/// * `name` - Display name, echoed into rendered reports
/// * `role` - Role driving the visibility policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

impl User {
    /// Creates a user with the given display name and role.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// Role classification of the requesting user.
///
/// The role is the sole input to the visibility policy; no other user
/// attribute is consulted. Role names outside the two recognized tokens
/// are kept verbatim in `Other` instead of being rejected.
///
/// # Variants
/// * `Admin` - the `"ADMIN"` role; sees every item with priority markers
/// * `User` - the `"USER"` role; sees only items at or below the user value
///   threshold
/// * `Other` - any unrecognized role name, carried through unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    /// Returns the wire name of the role.
    ///
    /// # Returns
    /// * `"ADMIN"` for `Role::Admin`
    /// * `"USER"` for `Role::User`
    /// * the stored name for `Role::Other`
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "ADMIN" => Role::Admin,
            "USER" => Role::User,
            _ => Role::Other(name),
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::from(name.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}
