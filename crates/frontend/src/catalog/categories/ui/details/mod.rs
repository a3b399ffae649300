use contracts::catalog::categories::{Category, CreateCategoryDto, UpdateCategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::catalog::categories::api;
use crate::shared::entity_cache::use_entity_cache;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;

/// Create/edit modal for a category. `category=None` creates.
#[component]
pub fn CategoryForm<F1, F2>(
    category: Option<Category>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let cache = use_entity_cache();
    let notifications = use_notifications();

    // Prefer the cached entity: a fetch may have refreshed it after the row
    // passed to us was rendered.
    let category = category.map(|c| {
        cache
            .get("category", &c.id)
            .and_then(|raw| serde_json::from_value::<Category>(raw).ok())
            .unwrap_or(c)
    });

    let is_edit = category.is_some();
    let name = RwSignal::new(category.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        category
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(category.as_ref().map(|c| c.is_active).unwrap_or(true));
    let original = StoredValue::new(category);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        let description_value = {
            let text = description.get();
            if text.trim().is_empty() {
                None
            } else {
                Some(text)
            }
        };

        spawn_local(async move {
            let result = match original.get_value() {
                Some(existing) => {
                    let dto = UpdateCategoryDto {
                        id: existing.id.clone(),
                        name: name.get_untracked(),
                        description: description_value,
                        parent_id: existing.parent_id.clone(),
                        is_active: is_active.get_untracked(),
                    };
                    if let Err(e) = dto.validate() {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                        return;
                    }
                    api::update_category(dto).await
                }
                None => {
                    let dto = CreateCategoryDto {
                        name: name.get_untracked(),
                        description: description_value,
                        parent_id: None,
                    };
                    if let Err(e) = dto.validate() {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                        return;
                    }
                    api::create_category(dto).await
                }
            };

            match result {
                Ok(saved) => {
                    if let Ok(raw) = serde_json::to_value(&saved) {
                        cache.insert("category", &saved.id, raw);
                    }
                    notifications.notify_success("Категория сохранена");
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
                        {if is_edit { "Редактирование категории" } else { "Новая категория" }}
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
                        <Label>"Описание"</Label>
                        <Input value=description disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <Show when=move || is_edit>
                        <div class="form__group">
                            <Checkbox checked=is_active label="Активна" />
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
