use contracts::system::roles::{CreateRoleDto, Role, UpdateRoleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::entity_cache::use_entity_cache;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::roles::api;

/// Split the textarea content into permission keys, one per line.
fn parse_permissions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Create/edit modal for a role. `role=None` creates.
#[component]
pub fn RoleForm<F1, F2>(role: Option<Role>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let cache = use_entity_cache();
    let notifications = use_notifications();

    let role = role.map(|r| {
        cache
            .get("role", &r.id)
            .and_then(|raw| serde_json::from_value::<Role>(raw).ok())
            .unwrap_or(r)
    });

    let is_edit = role.is_some();
    let name = RwSignal::new(role.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        role.as_ref()
            .and_then(|r| r.description.clone())
            .unwrap_or_default(),
    );
    let (permissions_text, set_permissions_text) = signal(
        role.as_ref()
            .map(|r| r.permissions.join("\n"))
            .unwrap_or_default(),
    );
    let original = StoredValue::new(role);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let description_value = {
                let text = description.get_untracked();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            };
            let permissions = parse_permissions(&permissions_text.get_untracked());

            let result = match original.get_value() {
                Some(existing) => {
                    let dto = UpdateRoleDto {
                        id: existing.id.clone(),
                        name: name.get_untracked(),
                        description: description_value,
                        permissions,
                    };
                    if let Err(e) = dto.validate() {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                        return;
                    }
                    api::update_role(dto).await
                }
                None => {
                    let dto = CreateRoleDto {
                        name: name.get_untracked(),
                        description: description_value,
                        permissions,
                    };
                    if let Err(e) = dto.validate() {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                        return;
                    }
                    api::create_role(dto).await
                }
            };

            match result {
                Ok(saved) => {
                    if let Ok(raw) = serde_json::to_value(&saved) {
                        cache.insert("role", &saved.id, raw);
                    }
                    notifications.notify_success("Роль сохранена");
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
                        {if is_edit { "Редактирование роли" } else { "Новая роль" }}
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

                    <div class="form__group">
                        <Label>"Разрешения (по одному на строку)"</Label>
                        <textarea
                            rows="8"
                            style="width: 100%; font-family: monospace; font-size: 13px;"
                            prop:value=move || permissions_text.get()
                            on:input=move |ev| set_permissions_text.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        ></textarea>
                    </div>
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

#[cfg(test)]
mod tests {
    use super::parse_permissions;

    #[test]
    fn permissions_parse_one_per_line() {
        let raw = "catalog.categories.view\n\n  sales.history.void  \n";
        assert_eq!(
            parse_permissions(raw),
            vec!["catalog.categories.view", "sales.history.void"]
        );
    }
}
