//! # Sign-in Allow-list
//!
//! The demo store has no user database: a fixed list of accounts may sign
//! in, everyone else is turned away.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_password, validate_username};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "secret_sauce";

/// Usernames accepted on the login page.
pub const DEMO_USERNAMES: [&str; 3] = ["standard_user", "visual_user", "checkout_user"];

/// Values from the login form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Accounts allowed to sign in.
#[derive(Debug, Clone)]
pub struct AllowList {
    accounts: Vec<(String, String)>,
}

impl AllowList {
    /// Builds a list from `(username, password)` pairs.
    pub fn new<U, P>(accounts: impl IntoIterator<Item = (U, P)>) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        AllowList {
            accounts: accounts
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }

    /// The hardcoded demo accounts.
    pub fn demo() -> Self {
        AllowList::new(DEMO_USERNAMES.map(|u| (u, DEMO_PASSWORD)))
    }

    /// Checks a login attempt and returns the (trimmed) username.
    ///
    /// ## Errors
    /// - `Validation(Required)` for an empty field
    /// - `InvalidCredentials` when the pair is not on the list
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::auth::{AllowList, Credentials};
    ///
    /// let accounts = AllowList::demo();
    /// let user = accounts
    ///     .authenticate(&Credentials::new(" standard_user ", "secret_sauce"))
    ///     .unwrap();
    /// assert_eq!(user, "standard_user");
    ///
    /// assert!(accounts
    ///     .authenticate(&Credentials::new("standard_user", "guess"))
    ///     .is_err());
    /// ```
    pub fn authenticate(&self, credentials: &Credentials) -> CoreResult<String> {
        let username = validate_username(&credentials.username)?;
        validate_password(&credentials.password)?;

        let allowed = self
            .accounts
            .iter()
            .any(|(u, p)| *u == username && *p == credentials.password);

        if allowed {
            Ok(username)
        } else {
            Err(CoreError::InvalidCredentials)
        }
    }
}

impl Default for AllowList {
    fn default() -> Self {
        AllowList::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_every_demo_account_signs_in() {
        let accounts = AllowList::demo();
        for username in DEMO_USERNAMES {
            let creds = Credentials::new(username, DEMO_PASSWORD);
            assert_eq!(accounts.authenticate(&creds).unwrap(), username);
        }
    }

    #[test]
    fn test_wrong_password_rejected() {
        let result = AllowList::demo().authenticate(&Credentials::new("standard_user", "Secret_Sauce"));
        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[test]
    fn test_unknown_user_rejected() {
        let result = AllowList::demo().authenticate(&Credentials::new("admin", DEMO_PASSWORD));
        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let result = AllowList::demo().authenticate(&Credentials::new("standard_user", " secret_sauce"));
        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[test]
    fn test_empty_fields_are_validation_errors() {
        let result = AllowList::demo().authenticate(&Credentials::new("", DEMO_PASSWORD));
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));

        let result = AllowList::demo().authenticate(&Credentials::new("standard_user", ""));
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_custom_allow_list() {
        let accounts = AllowList::new([("alice", "pw")]);
        assert!(accounts.authenticate(&Credentials::new("alice", "pw")).is_ok());
        assert!(accounts
            .authenticate(&Credentials::new("standard_user", DEMO_PASSWORD))
            .is_err());
    }
}
