pub mod details;

use contracts::domain::subject::Subject;
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::details::SubjectDetails;
use super::model;

#[component]
pub fn SubjectList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Subject>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);

    let fetch = move || {
        spawn_local(async move {
            match model::fetch_subjects().await {
                Ok(subjects) => {
                    set_items.set(subjects);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    };

    let handle_create = move || {
        set_editing_id.set(None);
        set_show_details.set(true);
    };

    let handle_edit = move |id: i64| {
        set_editing_id.set(Some(id));
        set_show_details.set(true);
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Удалить субъект?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match model::delete_subject(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("Ошибка удаления: {}", e))),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header" style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                <h1 class="header__title" style="margin: 0; font-size: 1.125rem;">"Субъекты рынка"</h1>
                <div class="header__actions" style="display: flex; gap: 8px;">
                    <button class="button button--primary" on:click=move |_| handle_create()>
                        "Новый субъект"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Обновить"
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box" style="background: #fdecea; color: #c0392b; padding: 8px 12px; border-radius: 4px; margin-bottom: 12px;">
                                {e}
                            </div>
                        }
                    })
            }}

            <div class="table">
                <table class="table__data table--striped" style="width: 100%; border-collapse: collapse; background: #fff;">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Наименование"</th>
                            <th class="table__header-cell">"БИН"</th>
                            <th class="table__header-cell">"Тип"</th>
                            <th class="table__header-cell">"Поставщики"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|subject| {
                                    let id = subject.id;
                                    view! {
                                        <tr class="table__row" on:click=move |_| handle_edit(id)>
                                            <td class="table__cell">{subject.name}</td>
                                            <td class="table__cell">{subject.bin}</td>
                                            <td class="table__cell">{subject.subject_type.display_name()}</td>
                                            <td class="table__cell">{subject.providers.len()}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--secondary"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        handle_delete(id);
                                                    }
                                                >
                                                    "Удалить"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_details.get()>
                <SubjectDetails
                    id=editing_id.get()
                    on_saved=Callback::new(move |_| {
                        set_show_details.set(false);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| set_show_details.set(false))
                />
            </Show>
        </div>
    }
}
