use contracts::org::branches::Branch;
use leptos::prelude::*;
use thaw::*;

use crate::org::branches::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::entity_cache::use_entity_cache;
use crate::shared::icons::icon;
use crate::shared::list::{ListController, ListControllerOptions};
use crate::shared::notify::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequirePermission;
use crate::system::auth::permissions as perm;

#[component]
pub fn BranchesPage() -> impl IntoView {
    view! {
        <RequirePermission permission=perm::BRANCHES_VIEW>
            <BranchesList />
        </RequirePermission>
    }
}

#[component]
fn BranchesList() -> impl IntoView {
    let (auth, _) = use_auth();
    let cache = use_entity_cache();
    let notifications = use_notifications();

    let list: ListController<Branch> = ListController::new(
        |query, signal| api::fetch_branches(query, signal),
        |id| api::delete_branch(id),
        ListControllerOptions {
            page_size: 10,
            entity_kind: "branch",
            delete_permission: perm::BRANCHES_DELETE,
            cache,
            notifications,
            auth,
        },
    );
    let state = list.state;

    Effect::new(move |_| list.ensure_loaded());

    let (show_create, set_show_create) = signal(false);
    let editing: RwSignal<Option<Branch>> = RwSignal::new(None);
    let can_manage = perm::use_permission(perm::BRANCHES_MANAGE);
    let can_delete = perm::use_permission(perm::BRANCHES_DELETE);

    view! {
        <PageFrame page_id="branches--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Филиалы"</h1>
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
                            placeholder="Название, код или адрес..."
                        />
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                            total_count=Signal::derive(move || state.with(|s| s.total_count))
                            page_size=Signal::derive(move || state.with(|s| s.page_size))
                            on_page_change=Callback::new(move |page| list.go_to_page(page))
                            on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                        />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Название"</TableHeaderCell>
                                <TableHeaderCell>"Код"</TableHeaderCell>
                                <TableHeaderCell>"Адрес"</TableHeaderCell>
                                <TableHeaderCell>"Телефон"</TableHeaderCell>
                                <TableHeaderCell>"Статус"</TableHeaderCell>
                                <TableHeaderCell></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|branch| branch.id.clone()
                                children=move |branch| {
                                    let row = StoredValue::new(branch.clone());
                                    let is_main = branch.is_main;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{branch.name.clone()}</span>
                                                    {if is_main {
                                                        view! { <span class="badge badge--info" style="margin-left: 6px;">"Главный"</span> }.into_any()
                                                    } else {
                                                        view! { <></> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{branch.code.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {branch.address.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {branch.phone.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if branch.is_active {
                                                        view! { <span class="badge badge--success">"Работает"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Закрыт"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
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
                                                // the main branch is not deletable, matching the backend rule
                                                <Show when=move || can_delete.get() && !is_main>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| list.delete_item(row.with_value(|b| b.id.clone()))
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
                        <super::details::BranchForm
                            branch=None
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

                {move || editing.get().map(|branch| view! {
                    <super::details::BranchForm
                        branch=Some(branch)
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
