use crate::shared::components::date_input::DateInput;
use crate::shared::date_utils::{shift_iso_date, today_iso};
use leptos::prelude::*;

/// Выбор операционных суток: поле даты плюс быстрые кнопки
/// "предыдущие сутки / сегодня / следующие сутки"
#[component]
pub fn DaySelector(
    /// Текущее значение в формате yyyy-mm-dd
    #[prop(into)]
    value: Signal<String>,
    /// Колбэк выбора даты (yyyy-mm-dd)
    on_select: Callback<String>,
) -> impl IntoView {
    let button_style = "width: 36px; height: 32px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.75rem; background: #fff; color: #495057; cursor: pointer; font-weight: 500; display: flex; align-items: center; justify-content: center; padding: 0;";

    let on_prev_day = move |_| {
        on_select.run(shift_iso_date(&value.get(), -1));
    };
    let on_today = move |_| {
        on_select.run(today_iso());
    };
    let on_next_day = move |_| {
        on_select.run(shift_iso_date(&value.get(), 1));
    };

    view! {
        <div style="display: flex; align-items: center; gap: 4px;">
            <DateInput value=value on_change=move |date| on_select.run(date) />
            <button on:click=on_prev_day style=button_style title="Предыдущие сутки">
                "-1Д"
            </button>
            <button on:click=on_today style=button_style title="Сегодня">
                "0Д"
            </button>
            <button on:click=on_next_day style=button_style title="Следующие сутки">
                "+1Д"
            </button>
        </div>
    }
}
