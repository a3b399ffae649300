use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access_token.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <AppShell />
        </Show>
    }
}
