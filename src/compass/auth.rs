//! Auth Stub
//!
//! Username/password login against a fixed in-memory user table.
//! The issued access token is the username itself, and presenting a token
//! later is just a username lookup. There is no hashing, expiry or revocation.

use super::types::{User, UserRecord};
use crate::error::ApiError;
use std::collections::HashMap;

pub const TOKEN_TYPE: &str = "bearer";

pub const LOGIN_FAILED: &str = "Incorrect username or password";
pub const INVALID_CREDENTIALS: &str = "Invalid authentication credentials";
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Read-only user table built once at startup
#[derive(Debug, Clone)]
pub struct UserStore {
    users: HashMap<String, UserRecord>,
}

impl UserStore {
    pub fn new(records: Vec<UserRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.username.clone(), record))
            .collect();
        Self { users }
    }

    /// The single demo account
    pub fn seeded() -> Self {
        Self::new(vec![UserRecord::new(
            "testuser",
            "test@example.com",
            "fakehashedpassword",
        )])
    }

    pub fn get_user(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Check credentials; unknown user and wrong password are indistinguishable
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&UserRecord, ApiError> {
        match self.get_user(username) {
            Some(user) if verify_password(password, &user.hashed_password) => Ok(user),
            _ => {
                log::debug!("Login rejected for '{}'", username);
                Err(ApiError::unauthorized(LOGIN_FAILED))
            }
        }
    }

    /// Resolve a bearer token (a username) to the public user view
    pub fn user_for_token(&self, token: &str) -> Result<User, ApiError> {
        self.get_user(token).map(UserRecord::public).ok_or_else(|| {
            log::debug!("Bearer token does not name a known user");
            ApiError::unauthorized(INVALID_CREDENTIALS)
        })
    }
}

/// Placeholder comparison standing in for real hash verification
pub fn verify_password(plain_password: &str, hashed_password: &str) -> bool {
    plain_password == hashed_password
}

/// Pull the token out of an `Authorization: Bearer <token>` header value
pub fn parse_bearer(header_value: Option<&str>) -> Result<&str, ApiError> {
    let not_authenticated = || ApiError::unauthorized(NOT_AUTHENTICATED);

    let value = header_value.ok_or_else(not_authenticated)?;
    // A bare scheme yields an empty token, which then fails the user lookup
    let (scheme, token) = value.split_once(' ').unwrap_or((value, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(not_authenticated());
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_login() {
        let store = UserStore::seeded();
        let user = store.authenticate("testuser", "fakehashedpassword").unwrap();
        assert_eq!(user.username, "testuser");
        assert_eq!(user.email.as_deref(), Some("test@example.com"));
        assert!(!user.disabled);
    }

    #[test]
    fn test_login_failures_look_the_same() {
        let store = UserStore::seeded();
        let wrong_password = store.authenticate("testuser", "nope").unwrap_err();
        let unknown_user = store.authenticate("ghost", "fakehashedpassword").unwrap_err();

        assert_eq!(wrong_password, unknown_user);
        assert_eq!(wrong_password, ApiError::unauthorized(LOGIN_FAILED));
    }

    #[test]
    fn test_token_is_username() {
        let store = UserStore::seeded();
        assert_eq!(store.user_for_token("testuser").unwrap().username, "testuser");
        assert_eq!(
            store.user_for_token("someone").unwrap_err(),
            ApiError::unauthorized(INVALID_CREDENTIALS)
        );
    }

    #[test]
    fn test_bare_bearer_scheme_is_invalid_credentials() {
        let store = UserStore::seeded();
        let token = parse_bearer(Some("Bearer")).unwrap();
        assert_eq!(token, "");
        assert_eq!(
            store.user_for_token(token).unwrap_err(),
            ApiError::unauthorized(INVALID_CREDENTIALS)
        );
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_parse_bearer() {
        assert_eq!(parse_bearer(Some("Bearer testuser")).unwrap(), "testuser");
        assert_eq!(parse_bearer(Some("bearer testuser")).unwrap(), "testuser");

        for bad in [None, Some("testuser"), Some("Basic dGVzdA=="), Some("")] {
            assert_eq!(
                parse_bearer(bad).unwrap_err(),
                ApiError::unauthorized(NOT_AUTHENTICATED)
            );
        }
    }
}
