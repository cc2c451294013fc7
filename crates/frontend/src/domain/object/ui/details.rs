use contracts::domain::object::{EnergyObjectDto, ObjectType};
use contracts::domain::subject::Subject;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::model;
use crate::domain::subject::model as subject_model;
use crate::shared::components::modal::Modal;

#[component]
pub fn ObjectDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(EnergyObjectDto::default());
    let (error, set_error) = signal(Option::<String>::None);
    let (subjects, set_subjects) = signal::<Vec<Subject>>(Vec::new());

    spawn_local(async move {
        match subject_model::fetch_subjects().await {
            Ok(list) => set_subjects.set(list),
            Err(e) => log::error!("справочник субъектов: {}", e),
        }
    });

    if let Some(existing_id) = id {
        spawn_local(async move {
            match model::fetch_object(existing_id).await {
                Ok(object) => {
                    form.set(EnergyObjectDto {
                        id: Some(object.id),
                        name: object.name,
                        eic_code: object.eic_code,
                        object_type: Some(object.object_type),
                        subject_id: Some(object.subject_id),
                        zone: object.zone,
                    });
                }
                Err(e) => set_error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    let submit = move || {
        let dto = form.get();
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }
        spawn_local(async move {
            match model::save_object(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => set_error.set(Some(format!("Ошибка сохранения: {}", e))),
            }
        });
    };

    let input_style = "width: 100%; padding: 7px 9px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; margin-bottom: 10px; box-sizing: border-box;";
    let title = if id.is_some() {
        "Объект"
    } else {
        "Новый объект"
    };

    view! {
        <Modal title=title on_close=Callback::new(move |_| on_cancel.run(()))>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div style="background: #fdecea; color: #c0392b; padding: 8px 10px; border-radius: 4px; margin-bottom: 10px; font-size: 0.8125rem;">
                                {e}
                            </div>
                        }
                    })
            }}

            <label style="font-size: 0.8125rem; color: #495057;">"Наименование"</label>
            <input
                type="text"
                style=input_style
                prop:value=move || form.get().name
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />

            <label style="font-size: 0.8125rem; color: #495057;">"EIC-код"</label>
            <input
                type="text"
                style=input_style
                maxlength="16"
                prop:value=move || form.get().eic_code
                on:input=move |ev| form.update(|f| f.eic_code = event_target_value(&ev))
            />

            <label style="font-size: 0.8125rem; color: #495057;">"Тип объекта"</label>
            <select
                style=input_style
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        f.object_type = match value.as_str() {
                            "GENERATION" => Some(ObjectType::Generation),
                            "CONSUMPTION" => Some(ObjectType::Consumption),
                            _ => None,
                        };
                    });
                }
            >
                <option value="" selected=move || form.get().object_type.is_none()>
                    "— не выбран —"
                </option>
                <option
                    value="GENERATION"
                    selected=move || form.get().object_type == Some(ObjectType::Generation)
                >
                    {ObjectType::Generation.display_name()}
                </option>
                <option
                    value="CONSUMPTION"
                    selected=move || form.get().object_type == Some(ObjectType::Consumption)
                >
                    {ObjectType::Consumption.display_name()}
                </option>
            </select>

            <label style="font-size: 0.8125rem; color: #495057;">"Субъект-владелец"</label>
            <select
                style=input_style
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.subject_id = value.parse::<i64>().ok());
                }
            >
                <option value="" selected=move || form.get().subject_id.is_none()>
                    "— не выбран —"
                </option>
                {move || {
                    subjects
                        .get()
                        .into_iter()
                        .map(|subject| {
                            let subject_id = subject.id;
                            view! {
                                <option
                                    value=subject_id.to_string()
                                    selected=move || form.get().subject_id == Some(subject_id)
                                >
                                    {subject.name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>

            <label style="font-size: 0.8125rem; color: #495057;">"Зона"</label>
            <input
                type="text"
                style=input_style
                prop:value=move || form.get().zone
                on:input=move |ev| form.update(|f| f.zone = event_target_value(&ev))
            />

            <div style="display: flex; gap: 8px; justify-content: flex-end; margin-top: 6px;">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Отмена"
                </button>
                <button class="button button--primary" on:click=move |_| submit()>
                    "Сохранить"
                </button>
            </div>
        </Modal>
    }
}
