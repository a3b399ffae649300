use leptos::prelude::*;

use super::permissions::use_permission;

/// Component that requires one permission key.
/// Shows fallback if the authenticated user does not hold it.
#[component]
pub fn RequirePermission(permission: &'static str, children: ChildrenFn) -> impl IntoView {
    let allowed = use_permission(permission);

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <div class="access-denied">"Недостаточно прав для просмотра раздела."</div> }
        >
            {children()}
        </Show>
    }
}
