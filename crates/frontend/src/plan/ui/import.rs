use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::super::codec;
use super::super::grid::PlanGrid;
use crate::shared::sheet_reader::read_sheet;

/// Кнопка импорта листа. Файл читается и валидируется целиком;
/// результат или текст ошибки уходит колбэками наружу.
#[component]
pub fn ImportControl(on_imported: Callback<PlanGrid>, on_error: Callback<String>) -> impl IntoView {
    let handle_file = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // сброс значения, чтобы повторный выбор того же файла снова сработал
        input.set_value("");

        spawn_local(async move {
            match read_sheet(file).await {
                Ok(raw) => match codec::import_rows(&raw) {
                    Ok(grid) => on_imported.run(grid),
                    Err(e) => on_error.run(e.to_string()),
                },
                Err(e) => on_error.run(e),
            }
        });
    };

    view! {
        <label
            class="button button--secondary"
            style="display: inline-flex; align-items: center; padding: 6px 12px; border: 1px solid #ced4da; border-radius: 4px; background: #fff; cursor: pointer; font-size: 0.875rem;"
        >
            "Импорт"
            <input
                type="file"
                accept=".xlsx,.xls,.csv"
                style="display: none;"
                on:change=handle_file
            />
        </label>
    }
}
