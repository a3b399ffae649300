use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::storage::SessionTokens;
use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore the session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(tokens) = storage::load_session() else {
                return;
            };
            // Validate the stored token by fetching the current user
            match api::get_current_user(&tokens.access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(tokens.access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(_) => {
                    // Access token stale, try the refresh token once
                    match api::refresh_token(tokens.refresh_token.clone()).await {
                        Ok(response) => {
                            storage::update_access_token(&response.access_token);
                            if let Ok(user_info) =
                                api::get_current_user(&response.access_token).await
                            {
                                set_auth_state.set(AuthState {
                                    access_token: Some(response.access_token),
                                    user_info: Some(user_info),
                                });
                            }
                        }
                        Err(_) => {
                            storage::clear_session();
                        }
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(username: String, password: String) -> Result<(), String> {
    let (_, set_auth_state) = use_auth();
    let response = api::login(username, password)
        .await
        .map_err(|e| e.to_string())?;

    storage::save_session(&SessionTokens {
        access_token: response.access_token.clone(),
        refresh_token: response.refresh_token,
    });

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout
pub async fn do_logout() {
    let (_, set_auth_state) = use_auth();
    if let Some(tokens) = storage::load_session() {
        let _ = api::logout(tokens.refresh_token).await;
    }

    storage::clear_session();

    set_auth_state.set(AuthState::default());
}
