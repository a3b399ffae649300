//! Permission keys and the capability check.
//!
//! Keys are flat strings granted through the user's role; the check is plain
//! set membership with an admin bypass. Destructive controls are hidden when
//! the check fails, and mutating operations re-check before any request
//! leaves the client.

use leptos::prelude::*;

use super::context::{use_auth, AuthState};

pub const CATEGORIES_VIEW: &str = "catalog.categories.view";
pub const CATEGORIES_MANAGE: &str = "catalog.categories.manage";
pub const CATEGORIES_DELETE: &str = "catalog.categories.delete";

pub const SUPPLIERS_VIEW: &str = "catalog.suppliers.view";
pub const SUPPLIERS_MANAGE: &str = "catalog.suppliers.manage";
pub const SUPPLIERS_DELETE: &str = "catalog.suppliers.delete";

pub const BRANCHES_VIEW: &str = "org.branches.view";
pub const BRANCHES_MANAGE: &str = "org.branches.manage";
pub const BRANCHES_DELETE: &str = "org.branches.delete";

pub const SALES_VIEW: &str = "sales.history.view";
pub const SALES_VOID: &str = "sales.history.void";

pub const ROLES_VIEW: &str = "system.roles.view";
pub const ROLES_MANAGE: &str = "system.roles.manage";
pub const ROLES_DELETE: &str = "system.roles.delete";

pub const USERS_VIEW: &str = "system.users.view";
pub const USERS_MANAGE: &str = "system.users.manage";
pub const USERS_DELETE: &str = "system.users.delete";

/// Does the authenticated user hold `permission`? Admins hold everything.
pub fn has_permission(auth: &AuthState, permission: &str) -> bool {
    match &auth.user_info {
        Some(user) => user.is_admin || user.permissions.iter().any(|p| p == permission),
        None => false,
    }
}

/// Reactive variant for gating controls in views.
pub fn use_permission(permission: &'static str) -> Signal<bool> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|auth| has_permission(auth, permission)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;

    fn user(is_admin: bool, permissions: &[&str]) -> AuthState {
        AuthState {
            access_token: Some("t".to_string()),
            user_info: Some(UserInfo {
                id: "u-1".to_string(),
                username: "cashier".to_string(),
                full_name: None,
                is_admin,
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
            }),
        }
    }

    #[test]
    fn membership_grants_exactly_the_listed_keys() {
        let auth = user(false, &[CATEGORIES_VIEW, CATEGORIES_MANAGE]);
        assert!(has_permission(&auth, CATEGORIES_VIEW));
        assert!(has_permission(&auth, CATEGORIES_MANAGE));
        assert!(!has_permission(&auth, CATEGORIES_DELETE));
        assert!(!has_permission(&auth, SALES_VOID));
    }

    #[test]
    fn admin_bypasses_the_set() {
        let auth = user(true, &[]);
        assert!(has_permission(&auth, USERS_DELETE));
    }

    #[test]
    fn anonymous_has_nothing() {
        assert!(!has_permission(&AuthState::default(), CATEGORIES_VIEW));
    }
}
