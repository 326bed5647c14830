//! Signed-in user persistence and the mock credential flows.

use std::sync::Arc;

use bazaar_kv::{get_json, set_json, KeyValueStore};

use crate::user::{Role, User};
use crate::AuthError;

/// Fixed key the signed-in user record lives under.
pub const USER_STORAGE_KEY: &str = "bazaar.user";

/// Holds the signed-in user record and mirrors it to the key-value slot.
///
/// Restore follows the same contract as the cart: a missing key means
/// signed out, a corrupt record is discarded and also means signed out,
/// and neither is an error.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    user: Option<User>,
}

impl SessionStore {
    /// Open the session store, restoring any signed-in user from
    /// [`USER_STORAGE_KEY`].
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self::open_at(store, USER_STORAGE_KEY)
    }

    /// Open the session store with an explicit storage key.
    pub fn open_at(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let user = match get_json::<User>(store.as_ref(), &key) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding corrupt persisted user record");
                store.remove(&key).ok();
                None
            }
        };
        Self { store, key, user }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Check if a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in by resolving `email` against a user directory.
    ///
    /// The password is accepted but not verified — this is the mock flow
    /// the storefront demos with; there is no credential storage at all.
    pub fn login(
        &mut self,
        email: &str,
        _password: &str,
        directory: &[User],
    ) -> Result<User, AuthError> {
        let found = directory
            .iter()
            .find(|u| u.email == email)
            .ok_or(AuthError::InvalidCredentials)?;

        set_json(self.store.as_ref(), &self.key, found)?;
        self.user = Some(found.clone());
        Ok(found.clone())
    }

    /// Register a new account and sign it in.
    ///
    /// Fails if the email already exists in the directory.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        directory: &[User],
    ) -> Result<User, AuthError> {
        let email = email.into();
        if directory.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailInUse(email));
        }

        let user = User::new(name, email, role);
        set_json(self.store.as_ref(), &self.key, &user)?;
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Sign out and clear the persisted record.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.remove(&self.key)?;
        self.user = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_kv::MemoryStore;

    fn directory() -> Vec<User> {
        vec![
            User::new("Ada", "ada@example.com", Role::Customer),
            User::new("Sam", "sam@example.com", Role::Seller),
        ]
    }

    #[test]
    fn test_open_empty_store_is_signed_out() {
        let store = Arc::new(MemoryStore::new());
        let session = SessionStore::open(store);
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_login_known_email() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SessionStore::open(store);

        let user = session
            .login("sam@example.com", "whatever", &directory())
            .unwrap();
        assert_eq!(user.name, "Sam");
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_login_unknown_email_fails() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SessionStore::open(store);

        let result = session.login("ghost@example.com", "whatever", &directory());
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_register_duplicate_email_fails() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SessionStore::open(store);

        let result = session.register("Imposter", "ada@example.com", Role::Customer, &directory());
        assert!(matches!(result, Err(AuthError::EmailInUse(_))));
    }

    #[test]
    fn test_register_signs_in() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SessionStore::open(store);

        session
            .register("New Seller", "new@example.com", Role::Seller, &directory())
            .unwrap();
        assert!(session.current_user().unwrap().is_seller());
    }

    #[test]
    fn test_session_survives_reopen() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut session = SessionStore::open(store.clone());
            session
                .login("ada@example.com", "whatever", &directory())
                .unwrap();
        }

        let session = SessionStore::open(store);
        assert_eq!(session.current_user().unwrap().email, "ada@example.com");
    }

    #[test]
    fn test_logout_clears_slot() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SessionStore::open(store.clone());
        session
            .login("ada@example.com", "whatever", &directory())
            .unwrap();

        session.logout().unwrap();
        assert!(!session.is_signed_in());
        assert!(store.get(USER_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_record_means_signed_out() {
        let store = Arc::new(MemoryStore::new());
        store.set(USER_STORAGE_KEY, "###").unwrap();

        let session = SessionStore::open(store.clone());
        assert!(!session.is_signed_in());
        assert!(store.get(USER_STORAGE_KEY).unwrap().is_none());
    }
}
