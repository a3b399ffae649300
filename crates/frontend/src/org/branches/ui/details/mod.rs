use contracts::org::branches::{Branch, CreateBranchDto, UpdateBranchDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::org::branches::api;
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

/// Create/edit modal for a branch. `branch=None` creates.
#[component]
pub fn BranchForm<F1, F2>(branch: Option<Branch>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let cache = use_entity_cache();
    let notifications = use_notifications();

    let branch = branch.map(|b| {
        cache
            .get("branch", &b.id)
            .and_then(|raw| serde_json::from_value::<Branch>(raw).ok())
            .unwrap_or(b)
    });

    let is_edit = branch.is_some();
    let name = RwSignal::new(branch.as_ref().map(|b| b.name.clone()).unwrap_or_default());
    let code = RwSignal::new(branch.as_ref().map(|b| b.code.clone()).unwrap_or_default());
    let address = RwSignal::new(
        branch
            .as_ref()
            .and_then(|b| b.address.clone())
            .unwrap_or_default(),
    );
    let phone = RwSignal::new(
        branch
            .as_ref()
            .and_then(|b| b.phone.clone())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(branch.as_ref().map(|b| b.is_active).unwrap_or(true));
    let original = StoredValue::new(branch);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match original.get_value() {
                Some(existing) => {
                    let dto = UpdateBranchDto {
                        id: existing.id.clone(),
                        name: name.get_untracked(),
                        code: code.get_untracked(),
                        address: optional(address.get_untracked()),
                        phone: optional(phone.get_untracked()),
                        is_active: is_active.get_untracked(),
                    };
                    if let Err(e) = dto.validate() {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                        return;
                    }
                    api::update_branch(dto).await
                }
                None => {
                    let dto = CreateBranchDto {
                        name: name.get_untracked(),
                        code: code.get_untracked(),
                        address: optional(address.get_untracked()),
                        phone: optional(phone.get_untracked()),
                    };
                    if let Err(e) = dto.validate() {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                        return;
                    }
                    api::create_branch(dto).await
                }
            };

            match result {
                Ok(saved) => {
                    if let Ok(raw) = serde_json::to_value(&saved) {
                        cache.insert("branch", &saved.id, raw);
                    }
                    notifications.notify_success("Филиал сохранён");
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
                        {if is_edit { "Редактирование филиала" } else { "Новый филиал" }}
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
                        <Label>"Код"</Label>
                        <Input value=code disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Адрес"</Label>
                        <Input value=address disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Телефон"</Label>
                        <Input value=phone disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <Show when=move || is_edit>
                        <div class="form__group">
                            <Checkbox checked=is_active label="Работает" />
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
