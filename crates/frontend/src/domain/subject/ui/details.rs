use contracts::domain::provider::Provider;
use contracts::domain::subject::{SubjectDto, SubjectType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::model;
use crate::domain::provider::model as provider_model;
use crate::shared::components::modal::Modal;

/// Форма субъекта: создание при id == None, иначе редактирование
#[component]
pub fn SubjectDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(SubjectDto::default());
    let (error, set_error) = signal(Option::<String>::None);
    let (providers, set_providers) = signal::<Vec<Provider>>(Vec::new());

    // Справочник поставщиков для назначения
    spawn_local(async move {
        match provider_model::fetch_providers().await {
            Ok(list) => set_providers.set(list),
            Err(e) => log::error!("справочник поставщиков: {}", e),
        }
    });

    if let Some(existing_id) = id {
        spawn_local(async move {
            match model::fetch_subject(existing_id).await {
                Ok(subject) => {
                    form.set(SubjectDto {
                        id: Some(subject.id),
                        name: subject.name,
                        bin: subject.bin,
                        subject_type: Some(subject.subject_type),
                        providers: subject.providers,
                    });
                }
                Err(e) => set_error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    let toggle_provider = move |provider_id: i64, checked: bool| {
        form.update(|f| {
            if checked {
                if !f.providers.contains(&provider_id) {
                    f.providers.push(provider_id);
                }
            } else {
                f.providers.retain(|p| *p != provider_id);
            }
        });
    };

    let submit = move || {
        let dto = form.get();
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }
        spawn_local(async move {
            match model::save_subject(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => set_error.set(Some(format!("Ошибка сохранения: {}", e))),
            }
        });
    };

    let input_style = "width: 100%; padding: 7px 9px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; margin-bottom: 10px; box-sizing: border-box;";
    let title = if id.is_some() {
        "Субъект"
    } else {
        "Новый субъект"
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

            <label style="font-size: 0.8125rem; color: #495057;">"БИН"</label>
            <input
                type="text"
                style=input_style
                prop:value=move || form.get().bin
                on:input=move |ev| form.update(|f| f.bin = event_target_value(&ev))
            />

            <label style="font-size: 0.8125rem; color: #495057;">"Тип субъекта"</label>
            <select
                style=input_style
                on:change=move |ev| {
                    form.update(|f| f.subject_type = SubjectType::from_wire(&event_target_value(&ev)));
                }
            >
                <option value="" selected=move || form.get().subject_type.is_none()>
                    "— не выбран —"
                </option>
                {SubjectType::all()
                    .into_iter()
                    .map(|t| {
                        view! {
                            <option
                                value=t.as_wire()
                                selected=move || form.get().subject_type == Some(t)
                            >
                                {t.display_name()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <label style="font-size: 0.8125rem; color: #495057;">"Поставщики"</label>
            <div style="max-height: 160px; overflow: auto; border: 1px solid #e9ecef; border-radius: 4px; padding: 8px; margin-bottom: 14px;">
                {move || {
                    providers
                        .get()
                        .into_iter()
                        .map(|provider| {
                            let provider_id = provider.id;
                            view! {
                                <label style="display: flex; align-items: center; gap: 6px; font-size: 0.875rem; padding: 2px 0;">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.get().providers.contains(&provider_id)
                                        on:change=move |ev| toggle_provider(provider_id, event_target_checked(&ev))
                                    />
                                    {provider.name}
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div style="display: flex; gap: 8px; justify-content: flex-end;">
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
