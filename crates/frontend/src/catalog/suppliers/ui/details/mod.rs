use contracts::catalog::suppliers::{CreateSupplierDto, Supplier, UpdateSupplierDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::catalog::suppliers::api;
use crate::shared::entity_cache::use_entity_cache;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Create/edit modal for a supplier. `supplier=None` creates.
#[component]
pub fn SupplierForm<F1, F2>(
    supplier: Option<Supplier>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let cache = use_entity_cache();
    let notifications = use_notifications();

    let supplier = supplier.map(|s| {
        cache
            .get("supplier", &s.id)
            .and_then(|raw| serde_json::from_value::<Supplier>(raw).ok())
            .unwrap_or(s)
    });

    let is_edit = supplier.is_some();
    let name = RwSignal::new(supplier.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let tax_id = RwSignal::new(
        supplier
            .as_ref()
            .and_then(|s| s.tax_id.clone())
            .unwrap_or_default(),
    );
    let contact_name = RwSignal::new(
        supplier
            .as_ref()
            .and_then(|s| s.contact_name.clone())
            .unwrap_or_default(),
    );
    let phone = RwSignal::new(
        supplier
            .as_ref()
            .and_then(|s| s.phone.clone())
            .unwrap_or_default(),
    );
    let email = RwSignal::new(
        supplier
            .as_ref()
            .and_then(|s| s.email.clone())
            .unwrap_or_default(),
    );
    let address = RwSignal::new(
        supplier
            .as_ref()
            .and_then(|s| s.address.clone())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(supplier.as_ref().map(|s| s.is_active).unwrap_or(true));
    let original = StoredValue::new(supplier);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match original.get_value() {
                Some(existing) => {
                    let dto = UpdateSupplierDto {
                        id: existing.id.clone(),
                        name: name.get_untracked(),
                        tax_id: optional(tax_id.get_untracked()),
                        contact_name: optional(contact_name.get_untracked()),
                        phone: optional(phone.get_untracked()),
                        email: optional(email.get_untracked()),
                        address: optional(address.get_untracked()),
                        is_active: is_active.get_untracked(),
                    };
                    if let Err(e) = dto.validate() {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                        return;
                    }
                    api::update_supplier(dto).await
                }
                None => {
                    let dto = CreateSupplierDto {
                        name: name.get_untracked(),
                        tax_id: optional(tax_id.get_untracked()),
                        contact_name: optional(contact_name.get_untracked()),
                        phone: optional(phone.get_untracked()),
                        email: optional(email.get_untracked()),
                        address: optional(address.get_untracked()),
                    };
                    if let Err(e) = dto.validate() {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                        return;
                    }
                    api::create_supplier(dto).await
                }
            };

            match result {
                Ok(saved) => {
                    if let Ok(raw) = serde_json::to_value(&saved) {
                        cache.insert("supplier", &saved.id, raw);
                    }
                    notifications.notify_success("Поставщик сохранён");
                    on_saved();
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">
                        {if is_edit { "Редактирование поставщика" } else { "Новый поставщик" }}
                    </h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Название"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"ИНН"</Label>
                        <Input value=tax_id disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Контактное лицо"</Label>
                        <Input value=contact_name disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Телефон"</Label>
                        <Input value=phone disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Адрес"</Label>
                        <Input value=address disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <Show when=move || is_edit>
                        <div class="form__group">
                            <Checkbox checked=is_active label="Активен" />
                        </div>
                    </Show>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
