use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryDto {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
}

impl CreateCategoryDto {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("название категории обязательно");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryDto {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("название категории обязательно");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_requires_name() {
        let dto = CreateCategoryDto {
            name: String::new(),
            description: None,
            parent_id: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn entity_deserializes_from_api_shape() {
        let raw = r#"{
            "id": "c-11",
            "name": "Бакалея",
            "description": null,
            "parent_id": null,
            "is_active": true,
            "created_at": "2025-01-10T09:00:00Z",
            "updated_at": "2025-01-12T10:30:00Z"
        }"#;
        let category: Category = serde_json::from_str(raw).unwrap();
        assert_eq!(category.name, "Бакалея");
        assert!(category.is_active);
    }
}
