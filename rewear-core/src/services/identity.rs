//! Identity service - registration, login, and sessions

use std::sync::Arc;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{Session, User};
use crate::ports::Store;

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 6;

/// Registration input
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity service for registration, login, and session resolution
pub struct IdentityService {
    store: Arc<dyn Store>,
    admin_email: String,
    starting_points: i64,
}

impl IdentityService {
    pub fn new(store: Arc<dyn Store>, config: &Config) -> Self {
        Self {
            store,
            admin_email: User::normalize_email(&config.admin_email),
            starting_points: config.starting_points,
        }
    }

    /// Register a new user
    ///
    /// The duplicate-email check runs inside the same commit that appends
    /// the user, so two concurrent registrations cannot both claim an email.
    pub fn register(&self, new_user: &NewUser) -> Result<User> {
        if new_user.name.trim().is_empty() {
            return Err(Error::validation("name cannot be empty"));
        }
        if !User::is_valid_email(&new_user.email) {
            return Err(Error::validation("email address is not valid"));
        }
        if new_user.password.len() < MIN_PASSWORD_LEN {
            return Err(Error::validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let email = User::normalize_email(&new_user.email);
        let is_admin = email == self.admin_email;
        let user = User::new(
            new_user.name.trim(),
            &email,
            &new_user.password,
            self.starting_points,
            is_admin,
        );

        self.store.commit(&mut |data| {
            if data.user_by_email(&user.email).is_some() {
                return Err(Error::DuplicateEmail(user.email.clone()));
            }
            data.users.push(user.clone());
            Ok(())
        })?;

        Ok(user)
    }

    /// Log in and persist a session
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        let mut logged_in: Option<User> = None;

        self.store.commit(&mut |data| {
            let user = data
                .user_by_email(email)
                .ok_or(Error::InvalidCredentials)?
                .clone();
            if !user.verify_password(password) {
                return Err(Error::InvalidCredentials);
            }
            data.session = Some(Session::issue(user.id.as_str()));
            logged_in = Some(user);
            Ok(())
        })?;

        logged_in.ok_or_else(|| Error::storage("login committed without a user"))
    }

    /// Clear the persisted session (idempotent)
    pub fn logout(&self) -> Result<()> {
        self.store.commit(&mut |data| {
            data.session = None;
            Ok(())
        })
    }

    /// The active session, if any
    pub fn session(&self) -> Result<Option<Session>> {
        Ok(self.store.snapshot()?.session)
    }

    /// Resolve the logged-in user via the session's id reference
    ///
    /// Always reflects the stored user record, so point balances are never
    /// stale. A dangling session (user since deleted) resolves to None.
    pub fn current_user(&self) -> Result<Option<User>> {
        let data = self.store.snapshot()?;
        let Some(session) = data.session.as_ref() else {
            return Ok(None);
        };
        Ok(data.user_by_id(&session.user_id).cloned())
    }

    /// The logged-in user, or `NotLoggedIn`
    pub fn require_user(&self) -> Result<User> {
        self.current_user()?.ok_or(Error::NotLoggedIn)
    }

    /// The logged-in user if they are an admin, or `Forbidden`
    pub fn require_admin(&self) -> Result<User> {
        let user = self.require_user()?;
        if !user.is_admin {
            return Err(Error::Forbidden("admin access required".to_string()));
        }
        Ok(user)
    }
}
