//! User Model

use crate::error::{AppError, AppResult};
use crate::validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role, gating the menus the front end exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            "customer" => Ok(Self::Customer),
            _ => Err(AppError::validation(
                "User type must be one of: admin, employee, customer",
            )),
        }
    }
}

/// User entity
///
/// The password is an opaque string compared verbatim at login. Username
/// uniqueness is enforced by the identity store, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub usertype: Role,
    pub phonenumber: String,
    pub gender: String,
    pub isactive: bool,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub usertype: String,
    pub phonenumber: String,
    pub gender: String,
}

/// Update user payload; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub usertype: Option<String>,
    pub phonenumber: Option<String>,
    pub gender: Option<String>,
    pub isactive: Option<bool>,
}

impl User {
    /// Validate every field and build an active user
    pub fn new(data: UserCreate) -> AppResult<Self> {
        validate::username(&data.username)?;
        validate::password(&data.password)?;
        let usertype = data.usertype.parse::<Role>()?;
        validate::phonenumber(&data.phonenumber)?;
        validate::gender(&data.gender)?;

        Ok(Self {
            username: data.username,
            password: data.password,
            usertype,
            phonenumber: data.phonenumber,
            gender: data.gender,
            isactive: true,
        })
    }

    pub fn activate(&mut self) {
        self.isactive = true;
    }

    pub fn deactivate(&mut self) {
        self.isactive = false;
    }

    /// Apply a partial update, re-validating each supplied field
    pub fn update(&mut self, patch: &UserUpdate) -> AppResult<()> {
        if let Some(username) = &patch.username {
            validate::username(username)?;
            self.username = username.clone();
        }
        if let Some(password) = &patch.password {
            validate::password(password)?;
            self.password = password.clone();
        }
        if let Some(usertype) = &patch.usertype {
            self.usertype = usertype.parse::<Role>()?;
        }
        if let Some(phonenumber) = &patch.phonenumber {
            validate::phonenumber(phonenumber)?;
            self.phonenumber = phonenumber.clone();
        }
        if let Some(gender) = &patch.gender {
            validate::gender(gender)?;
            self.gender = gender.clone();
        }
        if let Some(isactive) = patch.isactive {
            self.isactive = isactive;
        }
        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) Active: {}",
            self.username, self.usertype, self.isactive
        )
    }
}
