use serde::{Deserialize, Serialize};

use crate::common::{non_blank, unix_seconds};
use crate::error::{AppError, AppResult};
use crate::users::repo_types::User;

/// Request body for `POST /users/`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
}

impl CreateUserRequest {
    /// Returns the trimmed name; the password is kept verbatim.
    pub fn validate(&self) -> AppResult<String> {
        let name = non_blank("name", &self.name)?;
        require_password(&self.password)?;
        Ok(name)
    }
}

/// Request body for `PATCH /users/{id}`. Absent keys leave the column as is.
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    pub fn validate(&mut self) -> AppResult<()> {
        self.name = self.name.as_deref().map(|n| non_blank("name", n)).transpose()?;
        if let Some(password) = &self.password {
            require_password(password)?;
        }
        Ok(())
    }
}

fn require_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::Validation("password must not be empty".into()));
    }
    Ok(())
}

/// Public view of a user.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub name: String,
    pub creation_time: i64,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            creation_time: unix_seconds(u.creation_time),
        }
    }
}
