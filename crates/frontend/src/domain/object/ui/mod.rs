pub mod details;

use contracts::domain::object::EnergyObject;
use contracts::domain::subject::Subject;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

use self::details::ObjectDetails;
use super::model;
use crate::domain::subject::model as subject_model;

#[component]
pub fn ObjectList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<EnergyObject>>(Vec::new());
    let (subject_names, set_subject_names) = signal::<HashMap<i64, String>>(HashMap::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);

    let fetch = move || {
        spawn_local(async move {
            match model::fetch_objects().await {
                Ok(objects) => {
                    set_items.set(objects);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
            // Имена владельцев для колонки "Субъект"
            match subject_model::fetch_subjects().await {
                Ok(subjects) => {
                    set_subject_names.set(
                        subjects
                            .into_iter()
                            .map(|s: Subject| (s.id, s.name))
                            .collect(),
                    );
                }
                Err(e) => log::error!("справочник субъектов: {}", e),
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
            .map(|w| w.confirm_with_message("Удалить объект?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match model::delete_object(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("Ошибка удаления: {}", e))),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header" style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                <h1 class="header__title" style="margin: 0; font-size: 1.125rem;">"Объекты"</h1>
                <div class="header__actions" style="display: flex; gap: 8px;">
                    <button class="button button--primary" on:click=move |_| handle_create()>
                        "Новый объект"
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
                            <th class="table__header-cell">"EIC-код"</th>
                            <th class="table__header-cell">"Тип"</th>
                            <th class="table__header-cell">"Субъект"</th>
                            <th class="table__header-cell">"Зона"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|object| {
                                    let id = object.id;
                                    let owner = subject_names
                                        .get()
                                        .get(&object.subject_id)
                                        .cloned()
                                        .unwrap_or_else(|| format!("#{}", object.subject_id));
                                    view! {
                                        <tr class="table__row" on:click=move |_| handle_edit(id)>
                                            <td class="table__cell">{object.name}</td>
                                            <td class="table__cell">{object.eic_code}</td>
                                            <td class="table__cell">{object.object_type.display_name()}</td>
                                            <td class="table__cell">{owner}</td>
                                            <td class="table__cell">{object.zone}</td>
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
                <ObjectDetails
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
