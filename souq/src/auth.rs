//! Session and authorization layer
//!
//! One in-process session at a time. Login failures are unified into a
//! single authentication error so a caller cannot tell an unknown username
//! from a wrong password or a deactivated account.

use crate::services::UserService;
use shared::error::{AppError, AppResult};
use shared::models::{Role, User};

/// Message for every login failure, deliberately non-specific
const LOGIN_FAILED: &str = "Invalid username or password";

/// Current login state
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate against the identity store and open the session
    ///
    /// Passwords are compared as opaque strings; there is no hashing in this
    /// system.
    pub fn login(&mut self, users: &UserService, username: &str, password: &str) -> AppResult<User> {
        let user = users
            .find_user(username)
            .ok_or_else(|| AppError::authentication(LOGIN_FAILED))?;
        if !user.isactive {
            return Err(AppError::authentication(LOGIN_FAILED));
        }
        if user.password != password {
            return Err(AppError::authentication(LOGIN_FAILED));
        }
        self.current_user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Fail unless the session is open and the user's role is in `roles`
    pub fn require_role(&self, roles: &[Role]) -> AppResult<()> {
        let user = self
            .current_user
            .as_ref()
            .ok_or_else(|| AppError::authorization("You must be logged in"))?;
        if !roles.contains(&user.usertype) {
            return Err(AppError::authorization("You don't have the required role"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStore;
    use shared::models::UserCreate;

    fn users_with_alice() -> (tempfile::TempDir, UserService) {
        let dir = tempfile::tempdir().unwrap();
        let mut users = UserService::new(JsonStore::new(dir.path().join("users.json")));
        users
            .add_user(UserCreate {
                username: "alice".into(),
                password: "Secret1!".into(),
                usertype: "customer".into(),
                phonenumber: "771234567".into(),
                gender: "f".into(),
            })
            .unwrap();
        (dir, users)
    }

    #[test]
    fn test_login_success() {
        let (_dir, users) = users_with_alice();
        let mut session = Session::new();
        let user = session.login(&users, "alice", "Secret1!").unwrap();
        assert_eq!(user.username, "alice");
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_login_failures_are_unified() {
        let (_dir, mut users) = users_with_alice();
        let mut session = Session::new();

        let unknown = session.login(&users, "ghost", "Secret1!").unwrap_err();
        let wrong = session.login(&users, "alice", "wrong").unwrap_err();
        users.deactivate_user("alice").unwrap();
        let inactive = session.login(&users, "alice", "Secret1!").unwrap_err();

        assert_eq!(unknown, wrong);
        assert_eq!(wrong, inactive);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_require_role() {
        let (_dir, users) = users_with_alice();
        let mut session = Session::new();

        let err = session.require_role(&[Role::Admin]).unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));

        session.login(&users, "alice", "Secret1!").unwrap();
        assert!(session.require_role(&[Role::Customer]).is_ok());
        assert!(
            session
                .require_role(&[Role::Admin, Role::Employee])
                .is_err()
        );
    }

    #[test]
    fn test_logout_clears_session() {
        let (_dir, users) = users_with_alice();
        let mut session = Session::new();
        session.login(&users, "alice", "Secret1!").unwrap();
        session.logout();
        assert!(!session.is_logged_in());
        assert!(session.current_user().is_none());
    }
}
