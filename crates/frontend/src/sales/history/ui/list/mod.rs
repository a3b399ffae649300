use contracts::sales::history::Sale;
use leptos::prelude::*;
use thaw::*;

use crate::sales::history::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_datetime_utc;
use crate::shared::entity_cache::use_entity_cache;
use crate::shared::icons::icon;
use crate::shared::list::{ListController, ListControllerOptions};
use crate::shared::notify::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequirePermission;
use crate::system::auth::permissions as perm;

#[component]
pub fn SalesHistoryPage() -> impl IntoView {
    view! {
        <RequirePermission permission=perm::SALES_VIEW>
            <SalesHistoryList />
        </RequirePermission>
    }
}

#[component]
fn SalesHistoryList() -> impl IntoView {
    let (auth, _) = use_auth();
    let cache = use_entity_cache();
    let notifications = use_notifications();

    let list: ListController<Sale> = ListController::new(
        |query, signal| api::fetch_sales(query, signal),
        |id| api::void_sale(id),
        ListControllerOptions {
            page_size: 25,
            entity_kind: "sale",
            delete_permission: perm::SALES_VOID,
            cache,
            notifications,
            auth,
        },
    );
    let state = list.state;

    Effect::new(move |_| list.ensure_loaded());

    let can_void = perm::use_permission(perm::SALES_VOID);

    view! {
        <PageFrame page_id="sales-history--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"История продаж"</h1>
                    <Badge>{move || state.with(|s| s.total_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
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
                            placeholder="Номер чека, кассир или клиент..."
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
                                <TableHeaderCell>"Номер"</TableHeaderCell>
                                <TableHeaderCell>"Дата"</TableHeaderCell>
                                <TableHeaderCell>"Филиал"</TableHeaderCell>
                                <TableHeaderCell>"Кассир"</TableHeaderCell>
                                <TableHeaderCell>"Оплата"</TableHeaderCell>
                                <TableHeaderCell>"Сумма"</TableHeaderCell>
                                <TableHeaderCell>"Статус"</TableHeaderCell>
                                <TableHeaderCell></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|sale| sale.id.clone()
                                children=move |sale| {
                                    let row = StoredValue::new(sale.clone());
                                    let voided = sale.is_voided();
                                    let sold_at = format_datetime_utc(&sale.sold_at);
                                    let total = format!("{:.2}", sale.total);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{sale.number.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{sold_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {sale.branch_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {sale.cashier_name.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {match sale.payment_method.as_str() {
                                                        "cash" => "Наличные",
                                                        "card" => "Карта",
                                                        "transfer" => "Перевод",
                                                        other => other,
                                                    }.to_string()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">{total}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if voided {
                                                        view! { <span class="badge badge--error">"Аннулирована"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--success">"Завершена"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Show when=move || can_void.get() && !voided>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| list.delete_item(row.with_value(|s| s.id.clone()))
                                                        attr:title="Аннулировать"
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
            </div>
        </PageFrame>
    }
}
