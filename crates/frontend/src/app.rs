use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::entity_cache::provide_entity_cache;
use crate::shared::notify::provide_notifications;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // App-wide collaborators, provided once and injected everywhere else.
    provide_entity_cache();
    provide_notifications();

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
