use contracts::org::branches::{Branch, CreateBranchDto, UpdateBranchDto};
use web_sys::AbortSignal;

use crate::shared::api_error::ApiError;
use crate::shared::http;
use crate::shared::list::{ListPayload, ListQuery};

const BASE: &str = "/api/org/branches";

pub async fn fetch_branches(
    query: ListQuery,
    signal: Option<AbortSignal>,
) -> Result<ListPayload<Branch>, ApiError> {
    http::fetch_list(BASE, &query, signal).await
}

pub async fn create_branch(dto: CreateBranchDto) -> Result<Branch, ApiError> {
    http::post_entity(BASE, &dto).await
}

pub async fn update_branch(dto: UpdateBranchDto) -> Result<Branch, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&dto.id));
    http::put_entity(&path, &dto).await
}

pub async fn delete_branch(id: String) -> Result<(), ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&id));
    http::delete_entity(&path).await
}
