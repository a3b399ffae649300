use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_timestamp;
use crate::shared::entity_cache::use_entity_cache;
use crate::shared::icons::icon;
use crate::shared::list::{ListController, ListControllerOptions};
use crate::shared::notify::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequirePermission;
use crate::system::auth::permissions as perm;
use crate::system::users::api;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RequirePermission permission=perm::USERS_VIEW>
            <UsersList />
        </RequirePermission>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let (auth, _) = use_auth();
    let cache = use_entity_cache();
    let notifications = use_notifications();

    let list: ListController<User> = ListController::new(
        |query, signal| api::fetch_users(query, signal),
        |id| api::delete_user(id),
        ListControllerOptions {
            page_size: 25,
            entity_kind: "user",
            delete_permission: perm::USERS_DELETE,
            cache,
            notifications,
            auth,
        },
    );
    let state = list.state;

    Effect::new(move |_| list.ensure_loaded());

    let (show_create, set_show_create) = signal(false);
    let editing: RwSignal<Option<User>> = RwSignal::new(None);
    let can_manage = perm::use_permission(perm::USERS_MANAGE);
    let can_delete = perm::use_permission(perm::USERS_DELETE);

    let format_ts_opt = |value: &Option<String>| {
        value
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <PageFrame page_id="users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Пользователи"</h1>
                    <Badge>{move || state.with(|s| s.total_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can_manage.get()>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| set_show_create.set(true)
                        >
                            {icon("plus")}
                            " Новый"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.refresh()
                        disabled=Signal::derive(move || state.with(|s| s.loading))
                    >
                        {icon("refresh")}
                        {move || if state.with(|s| s.loading) { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <SearchInput
                            value=Signal::derive(move || state.with(|s| s.search_text.clone()))
                            on_change=Callback::new(move |text| list.set_search_text(text))
                            placeholder="Логин, ФИО или Email..."
                        />
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                            total_count=Signal::derive(move || state.with(|s| s.total_count))
                            page_size=Signal::derive(move || state.with(|s| s.page_size))
                            on_page_change=Callback::new(move |page| list.go_to_page(page))
                            on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                            page_size_options=vec![25, 50, 100]
                        />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Логин"</TableHeaderCell>
                                <TableHeaderCell>"ФИО"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Роль"</TableHeaderCell>
                                <TableHeaderCell>"Статус"</TableHeaderCell>
                                <TableHeaderCell>"Последний вход"</TableHeaderCell>
                                <TableHeaderCell></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|user| user.id.clone()
                                children=move |user| {
                                    let row = StoredValue::new(user.clone());
                                    let last_login = format_ts_opt(&user.last_login_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.username.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.full_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.email.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if user.is_admin {
                                                        view! { <span class="badge badge--warning">"Админ"</span> }.into_any()
                                                    } else {
                                                        view! { <span>{user.role_name.clone().unwrap_or_else(|| "-".to_string())}</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if user.is_active {
                                                        view! { <span class="badge badge--success">"Активен"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Заблок."</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{last_login}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=move || can_manage.get()>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| editing.set(Some(row.get_value()))
                                                        attr:title="Редактировать"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                </Show>
                                                <Show when=move || can_delete.get()>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| list.delete_item(row.with_value(|u| u.id.clone()))
                                                        attr:title="Удалить"
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </Show>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || if show_create.get() {
                    view! {
                        <super::details::UserForm
                            user=None
                            on_close=move || set_show_create.set(false)
                            on_saved=move || {
                                set_show_create.set(false);
                                list.refresh();
                            }
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing.get().map(|user| view! {
                    <super::details::UserForm
                        user=Some(user)
                        on_close=move || editing.set(None)
                        on_saved=move || {
                            editing.set(None);
                            list.refresh();
                        }
                    />
                })}
            </div>
        </PageFrame>
    }
}
