use leptos::prelude::*;

/// Поле выбора даты на нативном date-пикере браузера.
/// Значение всегда в формате yyyy-mm-dd; локаль отображения решает браузер.
#[component]
pub fn DateInput(
    /// Текущее значение в формате yyyy-mm-dd
    #[prop(into)]
    value: Signal<String>,
    /// Колбэк изменения (получает yyyy-mm-dd)
    on_change: impl Fn(String) + 'static,
    #[prop(optional)] style: Option<String>,
) -> impl IntoView {
    let default_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 130px;";
    let final_style = style.unwrap_or_else(|| default_style.to_string());

    view! {
        <input
            type="date"
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
            style=final_style
        />
    }
}
