use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::categories::ui::list::CategoriesPage;
use crate::catalog::suppliers::ui::list::SuppliersPage;
use crate::org::branches::ui::list::BranchesPage;
use crate::sales::history::ui::list::SalesHistoryPage;
use crate::shared::icons::icon;
use crate::shared::notify::{use_notifications, NoticeKind};
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::auth::permissions as perm;
use crate::system::roles::ui::list::RolesPage;
use crate::system::users::ui::list::UsersPage;

/// Sections of the back office. Navigation is a plain signal, not a router:
/// the app lives behind a login screen and has no deep links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Categories,
    Suppliers,
    Branches,
    SalesHistory,
    Roles,
    Users,
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (section, set_section) = signal(Section::Categories);

    let username = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.username.clone())
                .unwrap_or_default()
        })
    };

    let on_logout = move |_| {
        // leptos spawn keeps the reactive owner, which do_logout needs for
        // the auth context
        leptos::task::spawn_local(async move {
            do_logout().await;
        });
    };

    view! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="sidebar__brand">"Back Office"</div>
                <nav class="sidebar__nav">
                    <NavItem
                        section=Section::Categories
                        current=section
                        on_select=set_section
                        icon_name="categories"
                        label="Категории"
                        permission=perm::CATEGORIES_VIEW
                    />
                    <NavItem
                        section=Section::Suppliers
                        current=section
                        on_select=set_section
                        icon_name="suppliers"
                        label="Поставщики"
                        permission=perm::SUPPLIERS_VIEW
                    />
                    <NavItem
                        section=Section::Branches
                        current=section
                        on_select=set_section
                        icon_name="branches"
                        label="Филиалы"
                        permission=perm::BRANCHES_VIEW
                    />
                    <NavItem
                        section=Section::SalesHistory
                        current=section
                        on_select=set_section
                        icon_name="sales"
                        label="История продаж"
                        permission=perm::SALES_VIEW
                    />
                    <NavItem
                        section=Section::Roles
                        current=section
                        on_select=set_section
                        icon_name="roles"
                        label="Роли"
                        permission=perm::ROLES_VIEW
                    />
                    <NavItem
                        section=Section::Users
                        current=section
                        on_select=set_section
                        icon_name="users"
                        label="Пользователи"
                        permission=perm::USERS_VIEW
                    />
                </nav>
            </aside>
            <div class="app-shell__main">
                <header class="topbar">
                    <span class="topbar__user">{username}</span>
                    <button class="topbar__logout" on:click=on_logout title="Выйти">
                        {icon("logout")}
                    </button>
                </header>
                <NoticeHost />
                <main class="app-shell__content">
                    {move || match section.get() {
                        Section::Categories => view! { <CategoriesPage /> }.into_any(),
                        Section::Suppliers => view! { <SuppliersPage /> }.into_any(),
                        Section::Branches => view! { <BranchesPage /> }.into_any(),
                        Section::SalesHistory => view! { <SalesHistoryPage /> }.into_any(),
                        Section::Roles => view! { <RolesPage /> }.into_any(),
                        Section::Users => view! { <UsersPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
fn NavItem(
    section: Section,
    #[prop(into)] current: Signal<Section>,
    on_select: WriteSignal<Section>,
    icon_name: &'static str,
    label: &'static str,
    permission: &'static str,
) -> impl IntoView {
    let allowed = perm::use_permission(permission);

    view! {
        <Show when=move || allowed.get()>
            <button
                class=move || {
                    if current.get() == section {
                        "sidebar__item sidebar__item--active"
                    } else {
                        "sidebar__item"
                    }
                }
                on:click=move |_| on_select.set(section)
            >
                {icon(icon_name)}
                <span>{label}</span>
            </button>
        </Show>
    }
}

/// Renders the notification queue; each notice auto-dismisses after a few
/// seconds or on click.
#[component]
fn NoticeHost() -> impl IntoView {
    let notifications = use_notifications();
    let notices = notifications.notices();

    view! {
        <div class="notice-host">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        TimeoutFuture::new(5_000).await;
                        notifications.dismiss(id);
                    });
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice--success",
                        NoticeKind::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class>
                            <span>{notice.text.clone()}</span>
                            <button class="notice__close" on:click=move |_| notifications.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
