use contracts::system::roles::{CreateRoleDto, Role, UpdateRoleDto};
use web_sys::AbortSignal;

use crate::shared::api_error::ApiError;
use crate::shared::http;
use crate::shared::list::{ListPayload, ListQuery};

const BASE: &str = "/api/system/roles";

pub async fn fetch_roles(
    query: ListQuery,
    signal: Option<AbortSignal>,
) -> Result<ListPayload<Role>, ApiError> {
    http::fetch_list(BASE, &query, signal).await
}

pub async fn create_role(dto: CreateRoleDto) -> Result<Role, ApiError> {
    http::post_entity(BASE, &dto).await
}

pub async fn update_role(dto: UpdateRoleDto) -> Result<Role, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&dto.id));
    http::put_entity(&path, &dto).await
}

pub async fn delete_role(id: String) -> Result<(), ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&id));
    http::delete_entity(&path).await
}
