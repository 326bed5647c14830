//! User types.

use bazaar_commerce::ids::UserId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User role for route gating.
///
/// Checked client-side only; anything that actually needs access control
/// must enforce it on a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Marketplace seller with a dashboard.
    Seller,
    /// Marketplace administrator.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }

    /// Get permission level (higher = more permissions).
    pub fn level(&self) -> u8 {
        match self {
            Role::Customer => 0,
            Role::Seller => 1,
            Role::Admin => 2,
        }
    }

    /// Check if this role has at least the given permission level.
    pub fn has_permission(&self, required: Role) -> bool {
        self.level() >= required.level()
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "seller" => Ok(Role::Seller),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (unique in the directory).
    pub email: String,
    /// Role for route gating.
    pub role: Role,
    /// Avatar image URL.
    pub avatar: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl User {
    /// Create a new user with a freshly generated id.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
            created_at: current_timestamp(),
        }
    }

    /// Set the avatar URL.
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar = Some(url.into());
        self
    }

    /// Check if this user can reach the seller dashboard.
    pub fn is_seller(&self) -> bool {
        self.role.has_permission(Role::Seller)
    }

    /// Check if this user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
