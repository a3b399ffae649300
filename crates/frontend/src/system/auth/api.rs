use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_error::{server_error_message, ApiError};
use crate::shared::api_utils::api_url;

async fn post_auth<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &impl serde::Serialize,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Network(format!("не удалось сериализовать запрос: {e}")))?
        .send()
        .await
        .map_err(ApiError::from_send)?;

    if !response.ok() {
        let status = response.status();
        let payload = response.json::<Value>().await.unwrap_or(Value::Null);
        return Err(ApiError::Server {
            status,
            message: server_error_message(status, &payload),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(format!("не удалось разобрать ответ: {e}")))
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_auth("/api/system/auth/login", &request).await
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    post_auth("/api/system/auth/refresh", &request).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&request)
        .map_err(|e| ApiError::Network(format!("не удалось сериализовать запрос: {e}")))?
        .send()
        .await
        .map_err(ApiError::from_send)?;

    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
            message: format!("ошибка сервера ({})", response.status()),
        });
    }
    Ok(())
}

/// Fetch the profile and permission set of the authenticated user.
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {access_token}"))
        .send()
        .await
        .map_err(ApiError::from_send)?;

    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
            message: format!("ошибка сервера ({})", response.status()),
        });
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| ApiError::Network(format!("не удалось разобрать ответ: {e}")))
}
