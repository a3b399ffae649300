//! Authenticated request plumbing shared by every entity api module.
//!
//! One place knows how to attach the bearer token, encode list queries,
//! classify failures and peel response envelopes; the per-entity api modules
//! stay one-liners over these helpers.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::AbortSignal;

use super::api_error::{server_error_message, ApiError};
use super::api_utils::api_url;
use super::list::{envelope, ListPayload, ListQuery};
use crate::system::auth::storage;

fn auth_header() -> Result<String, ApiError> {
    storage::get_access_token()
        .map(|token| format!("Bearer {token}"))
        .ok_or(ApiError::Server {
            status: 401,
            message: "сессия истекла, войдите заново".to_string(),
        })
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    ApiError::Server {
        status,
        message: server_error_message(status, &body),
    }
}

async fn parse_body(response: Response) -> Result<Value, ApiError> {
    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Network(format!("не удалось разобрать ответ: {e}")))
}

fn parse_entity<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(envelope::unwrap_entity(body))
        .map_err(|e| ApiError::Network(format!("не удалось разобрать ответ: {e}")))
}

/// One list read: GET `<path>?page=&limit=[&search=]`, normalized to a flat
/// payload regardless of how the endpoint wraps its rows.
pub async fn fetch_list<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
    signal: Option<AbortSignal>,
) -> Result<ListPayload<T>, ApiError> {
    let auth = auth_header()?;
    let query_string = serde_qs::to_string(query)
        .map_err(|e| ApiError::Network(format!("не удалось построить запрос: {e}")))?;
    let url = format!("{}?{}", api_url(path), query_string);

    let response = Request::get(&url)
        .header("Authorization", &auth)
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(ApiError::from_send)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(envelope::parse_list_body(parse_body(response).await?))
}

pub async fn post_entity<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let auth = auth_header()?;
    let response = Request::post(&api_url(path))
        .header("Authorization", &auth)
        .json(body)
        .map_err(|e| ApiError::Network(format!("не удалось сериализовать запрос: {e}")))?
        .send()
        .await
        .map_err(ApiError::from_send)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    parse_entity(parse_body(response).await?)
}

pub async fn put_entity<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let auth = auth_header()?;
    let response = Request::put(&api_url(path))
        .header("Authorization", &auth)
        .json(body)
        .map_err(|e| ApiError::Network(format!("не удалось сериализовать запрос: {e}")))?
        .send()
        .await
        .map_err(ApiError::from_send)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    parse_entity(parse_body(response).await?)
}

pub async fn delete_entity(path: &str) -> Result<(), ApiError> {
    let auth = auth_header()?;
    let response = Request::delete(&api_url(path))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(ApiError::from_send)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}
