use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use web_sys::AbortSignal;

use crate::shared::api_error::ApiError;
use crate::shared::http;
use crate::shared::list::{ListPayload, ListQuery};

const BASE: &str = "/api/system/users";

pub async fn fetch_users(
    query: ListQuery,
    signal: Option<AbortSignal>,
) -> Result<ListPayload<User>, ApiError> {
    http::fetch_list(BASE, &query, signal).await
}

pub async fn create_user(dto: CreateUserDto) -> Result<User, ApiError> {
    http::post_entity(BASE, &dto).await
}

pub async fn update_user(dto: UpdateUserDto) -> Result<User, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&dto.id));
    http::put_entity(&path, &dto).await
}

pub async fn delete_user(id: String) -> Result<(), ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(&id));
    http::delete_entity(&path).await
}
