use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Built-in roles cannot be deleted; the backend rejects the attempt.
    pub is_system: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoleDto {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

impl CreateRoleDto {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("название роли обязательно");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

impl UpdateRoleDto {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("название роли обязательно");
        }
        Ok(())
    }
}
