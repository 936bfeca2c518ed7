//! # 用户载荷

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Validate, limits, rules};
use crate::error::ValidationError;

/// 创建用户请求，密码只在创建时出现且不会被序列化
#[derive(Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub username: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreate")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("password", &"***")
            .finish()
    }
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::email("email", &self.email)?;
        rules::max_len("username", &self.username, limits::USERNAME_MAX)?;
        rules::max_len("full_name", &self.full_name, limits::FULL_NAME_MAX)?;
        rules::len_between(
            "password",
            &self.password,
            limits::PASSWORD_MIN,
            limits::PASSWORD_MAX,
        )
    }
}

/// 更新用户请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl UserUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.username.is_none()
    }
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        rules::optional(self.full_name.as_deref(), |v| {
            rules::max_len("full_name", v, limits::FULL_NAME_MAX)
        })?;
        rules::optional(self.username.as_deref(), |v| {
            rules::max_len("username", v, limits::USERNAME_MAX)
        })
    }
}
