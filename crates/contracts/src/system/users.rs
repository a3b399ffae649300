use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role_id: Option<String>,
    pub is_admin: bool,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            bail!("логин обязателен");
        }
        if self.password.len() < 6 {
            bail!("пароль должен быть не короче 6 символов");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role_id: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateUserDto {
        CreateUserDto {
            username: "cashier1".to_string(),
            password: "secret99".to_string(),
            email: None,
            full_name: None,
            role_id: None,
            is_admin: false,
        }
    }

    #[test]
    fn valid_dto_passes() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn blank_username_rejected() {
        let mut d = dto();
        d.username = "   ".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn short_password_rejected() {
        let mut d = dto();
        d.password = "12345".to_string();
        assert!(d.validate().is_err());
    }
}
