use serde::{Deserialize, Serialize};
use web_sys::window;

/// One localStorage key for the whole session, so a half-cleared pair of
/// tokens can never be observed.
const SESSION_KEY: &str = "backoffice_session";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(tokens: &SessionTokens) {
    if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(tokens)) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

pub fn load_session() -> Option<SessionTokens> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Access token for the Authorization header, if a session exists.
pub fn get_access_token() -> Option<String> {
    load_session().map(|tokens| tokens.access_token)
}

/// Replace only the access token after a refresh.
pub fn update_access_token(access_token: &str) {
    if let Some(mut tokens) = load_session() {
        tokens.access_token = access_token.to_string();
        save_session(&tokens);
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
