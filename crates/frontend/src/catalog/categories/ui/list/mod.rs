use contracts::catalog::categories::Category;
use leptos::prelude::*;
use thaw::*;

use crate::catalog::categories::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_timestamp;
use crate::shared::entity_cache::use_entity_cache;
use crate::shared::icons::icon;
use crate::shared::list::{ListController, ListControllerOptions};
use crate::shared::notify::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequirePermission;
use crate::system::auth::permissions as perm;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <RequirePermission permission=perm::CATEGORIES_VIEW>
            <CategoriesList />
        </RequirePermission>
    }
}

#[component]
fn CategoriesList() -> impl IntoView {
    let (auth, _) = use_auth();
    let cache = use_entity_cache();
    let notifications = use_notifications();

    let list: ListController<Category> = ListController::new(
        |query, signal| api::fetch_categories(query, signal),
        |id| api::delete_category(id),
        ListControllerOptions {
            page_size: 10,
            entity_kind: "category",
            delete_permission: perm::CATEGORIES_DELETE,
            cache,
            notifications,
            auth,
        },
    );
    let state = list.state;

    Effect::new(move |_| list.ensure_loaded());

    let (show_create, set_show_create) = signal(false);
    let editing: RwSignal<Option<Category>> = RwSignal::new(None);
    let can_manage = perm::use_permission(perm::CATEGORIES_MANAGE);
    let can_delete = perm::use_permission(perm::CATEGORIES_DELETE);

    view! {
        <PageFrame page_id="categories--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Категории"</h1>
                    <Badge>{move || state.with(|s| s.total_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can_manage.get()>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| set_show_create.set(true)
                        >
                            {icon("plus")}
                            " Новая"
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
                            placeholder="Название или описание..."
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
                                <TableHeaderCell>"Описание"</TableHeaderCell>
                                <TableHeaderCell>"Статус"</TableHeaderCell>
                                <TableHeaderCell>"Изменена"</TableHeaderCell>
                                <TableHeaderCell></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|category| category.id.clone()
                                children=move |category| {
                                    let row = StoredValue::new(category.clone());
                                    let updated = format_timestamp(&category.updated_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{category.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category.description.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if category.is_active {
                                                        view! { <span class="badge badge--success">"Активна"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Скрыта"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{updated}</TableCellLayout>
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
                                                        on_click=move |_| list.delete_item(row.with_value(|c| c.id.clone()))
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
                        <super::details::CategoryForm
                            category=None
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

                {move || editing.get().map(|category| view! {
                    <super::details::CategoryForm
                        category=Some(category)
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
