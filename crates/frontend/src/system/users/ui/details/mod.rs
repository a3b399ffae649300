use contracts::system::roles::Role;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::entity_cache::use_entity_cache;
use crate::shared::icons::icon;
use crate::shared::list::ListQuery;
use crate::shared::notify::use_notifications;
use crate::system::roles::api as roles_api;
use crate::system::users::api;

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Create/edit modal for a user. `user=None` creates.
#[component]
pub fn UserForm<F1, F2>(user: Option<User>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let cache = use_entity_cache();
    let notifications = use_notifications();

    let user = user.map(|u| {
        cache
            .get("user", &u.id)
            .and_then(|raw| serde_json::from_value::<User>(raw).ok())
            .unwrap_or(u)
    });

    let is_edit = user.is_some();
    let username = RwSignal::new(user.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(
        user.as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_default(),
    );
    let full_name = RwSignal::new(
        user.as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let (role_id, set_role_id) = signal(
        user.as_ref()
            .and_then(|u| u.role_id.clone())
            .unwrap_or_default(),
    );
    let is_admin = RwSignal::new(user.as_ref().map(|u| u.is_admin).unwrap_or(false));
    let is_active = RwSignal::new(user.as_ref().map(|u| u.is_active).unwrap_or(true));
    let original = StoredValue::new(user);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    // Reference data for the role selector.
    let roles: RwSignal<Vec<Role>> = RwSignal::new(Vec::new());
    Effect::new(move |_| {
        spawn_local(async move {
            match roles_api::fetch_roles(ListQuery::new(1, 100, ""), None).await {
                Ok(payload) => roles.set(payload.rows),
                Err(e) => log::warn!("failed to load roles for the selector: {}", e),
            }
        });
    });

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let role_value = optional(role_id.get_untracked());

            let result = match original.get_value() {
                Some(existing) => {
                    let dto = UpdateUserDto {
                        id: existing.id.clone(),
                        email: optional(email.get_untracked()),
                        full_name: optional(full_name.get_untracked()),
                        role_id: role_value,
                        is_active: is_active.get_untracked(),
                        is_admin: is_admin.get_untracked(),
                    };
                    api::update_user(dto).await
                }
                None => {
                    let dto = CreateUserDto {
                        username: username.get_untracked(),
                        password: password.get_untracked(),
                        email: optional(email.get_untracked()),
                        full_name: optional(full_name.get_untracked()),
                        role_id: role_value,
                        is_admin: is_admin.get_untracked(),
                    };
                    if let Err(e) = dto.validate() {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                        return;
                    }
                    api::create_user(dto).await
                }
            };

            match result {
                Ok(saved) => {
                    if let Ok(raw) = serde_json::to_value(&saved) {
                        cache.insert("user", &saved.id, raw);
                    }
                    notifications.notify_success("Пользователь сохранён");
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
                        {if is_edit { "Редактирование пользователя" } else { "Новый пользователь" }}
                    </h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <Show when=move || !is_edit>
                        <div class="form__group">
                            <Label>"Логин"</Label>
                            <Input value=username disabled=Signal::derive(move || saving.get()) />
                        </div>

                        <div class="form__group">
                            <Label>"Пароль"</Label>
                            <Input
                                value=password
                                input_type=InputType::Password
                                disabled=Signal::derive(move || saving.get())
                            />
                        </div>
                    </Show>

                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"ФИО"</Label>
                        <Input value=full_name disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Роль"</Label>
                        <select
                            on:change=move |ev| set_role_id.set(event_target_value(&ev))
                            prop:value=move || role_id.get()
                            disabled=move || saving.get()
                        >
                            <option value="">"Без роли"</option>
                            {move || roles.get().into_iter().map(|role| {
                                let value = role.id.clone();
                                let selected_id = role.id.clone();
                                view! {
                                    <option value=value selected=move || role_id.get() == selected_id>
                                        {role.name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Checkbox checked=is_admin label="Администратор" />
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
