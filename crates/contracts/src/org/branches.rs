use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    /// Short code used in receipts and sale numbers, e.g. "MAIN", "NORTE".
    pub code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_main: bool,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBranchDto {
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl CreateBranchDto {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("название филиала обязательно");
        }
        if self.code.trim().is_empty() {
            bail!("код филиала обязателен");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBranchDto {
    pub id: String,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

impl UpdateBranchDto {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("название филиала обязательно");
        }
        if self.code.trim().is_empty() {
            bail!("код филиала обязателен");
        }
        Ok(())
    }
}
