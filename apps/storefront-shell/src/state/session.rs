//! # Session State
//!
//! Holds the current shopper session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may read or replace it
//! 2. Commands can arrive from more than one thread
//!
//! Core operations never mutate a `Session`; they return a new one. Writers
//! compute the next value under the lock and store it in one assignment, so
//! a reader sees either the old session or the new one, never a mix.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_core::{CoreResult, Session};

/// Shared session state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// A poisoned lock still guards a complete `Session`, so keep using it.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        f(&self.lock())
    }

    /// Computes the next session from the current one and stores it.
    ///
    /// If `f` fails, the stored session is left as it was.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront_core::auth::{AllowList, Credentials, DEMO_PASSWORD};
    /// use storefront_shell::state::SessionState;
    ///
    /// let state = SessionState::new();
    /// let creds = Credentials::new("standard_user", DEMO_PASSWORD);
    /// state.update(|s| s.sign_in(&AllowList::demo(), &creds)).unwrap();
    /// assert!(state.snapshot().is_signed_in());
    /// ```
    pub fn update<F>(&self, f: F) -> CoreResult<Session>
    where
        F: FnOnce(&Session) -> CoreResult<Session>,
    {
        let mut guard = self.lock();
        let next = f(&guard)?;
        *guard = next.clone();
        Ok(next)
    }

    /// Like [`update`](Self::update), for steps that also produce a value.
    pub fn update_with<F, T>(&self, f: F) -> CoreResult<(Session, T)>
    where
        F: FnOnce(&Session) -> CoreResult<(Session, T)>,
    {
        let mut guard = self.lock();
        let (next, value) = f(&guard)?;
        *guard = next.clone();
        Ok((next, value))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use storefront_core::auth::{AllowList, Credentials, DEMO_PASSWORD};
    use storefront_core::{Catalog, CoreError, ProductId, Screen};

    use super::*;

    fn signed_in_state() -> SessionState {
        let state = SessionState::new();
        state
            .update(|s| {
                s.sign_in(
                    &AllowList::demo(),
                    &Credentials::new("standard_user", DEMO_PASSWORD),
                )
            })
            .unwrap();
        state
    }

    #[test]
    fn test_failed_update_keeps_previous_session() {
        let state = signed_in_state();
        let before = state.snapshot();

        let result = state.update(|s| s.navigate(&Catalog::demo(), Screen::Checkout));

        assert_eq!(result, Err(CoreError::EmptyCart));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let state = signed_in_state();
        let catalog = Catalog::demo();
        let product = catalog.get(ProductId::new(1)).unwrap().clone();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                let product = product.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        state
                            .update(|s| Ok(s.with_cart(s.cart().add_item(&product, 1))))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let quantity = state.with_session(|s| s.cart().get(product.id).map(|i| i.quantity));
        assert_eq!(quantity, Some(200));
    }
}
