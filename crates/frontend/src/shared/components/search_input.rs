use crate::shared::icons::icon;
use leptos::prelude::*;

/// Текстовый фильтр списка с кнопкой очистки.
///
/// Сам input не делает debounce: каждое нажатие уходит в `on_change`, а
/// задержку перед запросом держит контроллер списка.
#[component]
pub fn SearchInput(
    /// Current filter value, owned by the list state.
    #[prop(into)]
    value: Signal<String>,
    /// Called on every keystroke and on clear.
    on_change: Callback<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input" style="position: relative; display: inline-flex; align-items: center;">
            <span style="position: absolute; left: 8px; color: #888; display: inline-flex;">
                {icon("search")}
            </span>
            <input
                type="text"
                placeholder=placeholder
                style="width: 260px; padding: 6px 32px 6px 30px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=move |_| on_change.run(String::new())
                        title="Очистить"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
