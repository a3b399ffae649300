use contracts::catalog::categories::{Category, CreateCategoryDto, UpdateCategoryDto};
use web_sys::AbortSignal;

use crate::shared::api_error::ApiError;
use crate::shared::http;
use crate::shared::list::{ListPayload, ListQuery};

const BASE: &str = "/api/catalog/categories";

pub async fn fetch_categories(
    query: ListQuery,
    signal: Option<AbortSignal>,
) -> Result<ListPayload<Category>, ApiError> {
    http::fetch_list(BASE, &query, signal).await
}

pub async fn create_category(dto: CreateCategoryDto) -> Result<Category, ApiError> {
    http::post_entity(BASE, &dto).await
}

pub async fn update_category(dto: UpdateCategoryDto) -> Result<Category, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&dto.id));
    http::put_entity(&path, &dto).await
}

pub async fn delete_category(id: String) -> Result<(), ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&id));
    http::delete_entity(&path).await
}
