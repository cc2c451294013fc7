use leptos::prelude::*;

/// Модальное окно поверх страницы с заголовком и кнопкой закрытия
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div
            class="modal-overlay"
            style="position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 1000;"
        >
            <div
                class="modal"
                style="background: #fff; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); min-width: 420px; max-width: min(900px, 95vw); max-height: 90vh; overflow: auto;"
            >
                <div
                    class="modal__header"
                    style="display: flex; justify-content: space-between; align-items: center; padding: 14px 20px; border-bottom: 1px solid #e9ecef;"
                >
                    <h2 style="margin: 0; font-size: 1rem;">{title.clone()}</h2>
                    <button
                        class="modal__close"
                        style="border: none; background: none; font-size: 1.25rem; cursor: pointer; color: #6c757d;"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                <div class="modal__body" style="padding: 20px;">{children()}</div>
            </div>
        </div>
    }
}
