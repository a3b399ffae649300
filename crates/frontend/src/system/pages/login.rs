use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::do_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(username_val, password_val).await {
                Ok(()) => {
                    // AuthProvider state flips and the shell takes over
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Не удалось войти: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Back Office"</h1>
                <h2>"Вход в систему"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Логин"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
