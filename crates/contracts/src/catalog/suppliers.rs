use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    /// Tax identification number, unique per supplier when present.
    pub tax_id: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSupplierDto {
    pub name: String,
    pub tax_id: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl CreateSupplierDto {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("название поставщика обязательно");
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                bail!("некорректный email");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSupplierDto {
    pub id: String,
    pub name: String,
    pub tax_id: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
}

impl UpdateSupplierDto {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("название поставщика обязательно");
        }
        Ok(())
    }
}
