//! Mock user directory.

use bazaar_auth::{Role, User};
use bazaar_commerce::ids::UserId;

fn account(id: &str, name: &str, email: &str, role: Role) -> User {
    let mut user = User::new(name, email, role);
    user.id = UserId::new(id);
    user.created_at = 1_704_067_200;
    user
}

/// The demo directory: one customer, one seller, one admin.
///
/// The seller account corresponds to the "seller-volt" listings in the
/// product fixture so the dashboard has data to show.
pub fn sample_users() -> Vec<User> {
    vec![
        account("user-001", "Maya Chen", "maya@example.com", Role::Customer),
        account("user-002", "Victor Ortiz", "victor@voltsupply.com", Role::Seller),
        account("user-003", "Priya Nair", "priya@bazaar.test", Role::Admin),
    ]
}
