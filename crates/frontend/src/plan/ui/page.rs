use std::collections::HashMap;

use contracts::domain::day::DayStatus;
use contracts::domain::object::EnergyObject;
use contracts::domain::subject::Subject;
use contracts::plan::PlanIntent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::import::ImportControl;
use super::table::PlanTable;
use crate::api::ApiClient;
use crate::domain::object::model as object_model;
use crate::domain::subject::model as subject_model;
use crate::plan::codec;
use crate::plan::fetch::{fetch_plan, fetch_status, EntityRef};
use crate::plan::grid::PlanGrid;
use crate::plan::report::report_filename;
use crate::plan::sync::submit_plan;
use crate::shared::components::day_selector::DaySelector;
use crate::shared::components::notice::{show_notice, Notice, NoticeBanner, NoticeKind};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::{parse_iso_date, today_iso};
use crate::shared::export::download_csv;

/// Страница суточного плана: выбор даты и сущности, почасовая сетка,
/// импорт/экспорт листа, отправка на сохранение и согласование.
#[component]
pub fn PlanPage() -> impl IntoView {
    let (date, set_date) = signal(today_iso());
    let (subjects, set_subjects) = signal::<Vec<Subject>>(Vec::new());
    let (objects, set_objects) = signal::<Vec<EnergyObject>>(Vec::new());
    let (selected_subject, set_selected_subject) = signal::<Option<i64>>(None);
    let (selected_object, set_selected_object) = signal::<Option<i64>>(None);
    let grid = RwSignal::new(PlanGrid::new());
    let statuses = RwSignal::new(HashMap::<EntityRef, DayStatus>::new());
    let notice = RwSignal::new(Option::<Notice>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    // Поколение выбора: завершение запроса под устаревший выбор игнорируется
    let generation = StoredValue::new(0u64);

    // Справочник субъектов один раз при монтировании
    spawn_local(async move {
        match subject_model::fetch_subjects().await {
            Ok(list) => set_subjects.set(list),
            Err(e) => show_notice(
                notice,
                NoticeKind::Error,
                format!("Справочник субъектов: {}", e),
            ),
        }
    });

    // Объекты выбранного субъекта
    Effect::new(move |_| {
        let subject_id = selected_subject.get();
        set_objects.set(Vec::new());
        set_selected_object.set(None);
        let Some(subject_id) = subject_id else {
            return;
        };
        spawn_local(async move {
            match object_model::fetch_subject_objects(subject_id).await {
                Ok(list) => set_objects.set(list),
                Err(e) => log::error!("объекты субъекта {}: {}", subject_id, e),
            }
        });
    });

    // Перезагрузка сетки и статусов под текущий выбор. Несохранённые
    // правки при этом теряются: после смены выбора или успешной отправки
    // истиной считается сервер.
    let reload = move || {
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        let entity = match selected_object.get_untracked() {
            Some(object_id) => Some(EntityRef::Object(object_id)),
            None => selected_subject.get_untracked().map(EntityRef::Subject),
        };

        let Some(entity) = entity else {
            grid.set(PlanGrid::new());
            statuses.set(HashMap::new());
            return;
        };
        let Ok(plan_date) = parse_iso_date(&date.get_untracked()) else {
            return;
        };

        spawn_local(async move {
            let client = ApiClient::from_window();
            match fetch_plan(&client, plan_date, entity).await {
                Ok(data) => {
                    if generation.get_value() == current {
                        grid.set(PlanGrid::from_hours(&data.hours));
                    } else {
                        log::warn!("ответ устаревшего выбора проигнорирован");
                    }
                }
                Err(e) => {
                    if generation.get_value() == current {
                        show_notice(
                            notice,
                            NoticeKind::Error,
                            format!("Ошибка загрузки плана: {}", e),
                        );
                    }
                }
            }
        });

        // Статусы всех видимых сущностей: по одному независимому запросу,
        // порядок завершения не важен
        let mut visible: Vec<EntityRef> = Vec::new();
        if let Some(subject_id) = selected_subject.get_untracked() {
            visible.push(EntityRef::Subject(subject_id));
        }
        for object in objects.get_untracked() {
            visible.push(EntityRef::Object(object.id));
        }
        statuses.set(HashMap::new());
        for entity in visible {
            spawn_local(async move {
                let client = ApiClient::from_window();
                let status = fetch_status(&client, plan_date, entity).await;
                if generation.get_value() == current {
                    statuses.update(|map| {
                        map.insert(entity, status);
                    });
                }
            });
        }
    };

    // Любая смена выбора (и приход списка объектов) перечитывает данные
    Effect::new(move |_| {
        date.track();
        selected_subject.track();
        selected_object.track();
        objects.track();
        reload();
    });

    let submit = move |intent: PlanIntent| {
        let Some(subject_id) = selected_subject.get_untracked() else {
            return;
        };
        let Ok(plan_date) = parse_iso_date(&date.get_untracked()) else {
            return;
        };
        let snapshot = grid.get_untracked();
        set_is_submitting.set(true);
        spawn_local(async move {
            let client = ApiClient::from_window();
            match submit_plan(&client, intent, subject_id, plan_date, &snapshot).await {
                Ok(()) => {
                    let text = match intent {
                        PlanIntent::Save => "План сохранён",
                        PlanIntent::Approve => "План рассчитан и согласован",
                    };
                    show_notice(notice, NoticeKind::Success, text);
                    reload();
                }
                Err(e) => {
                    // правки остаются в сетке, пользователь может повторить
                    let action = match intent {
                        PlanIntent::Save => "сохранения",
                        PlanIntent::Approve => "согласования",
                    };
                    show_notice(notice, NoticeKind::Error, format!("Ошибка {}: {}", action, e));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let entity_name = move || -> String {
        if let Some(object_id) = selected_object.get_untracked() {
            if let Some(object) = objects
                .get_untracked()
                .into_iter()
                .find(|o| o.id == object_id)
            {
                return object.name;
            }
        }
        if let Some(subject_id) = selected_subject.get_untracked() {
            if let Some(subject) = subjects
                .get_untracked()
                .into_iter()
                .find(|s| s.id == subject_id)
            {
                return subject.name;
            }
        }
        "план".to_string()
    };

    let handle_export = move |_| {
        let rows = codec::export_rows(&grid.get_untracked());
        let filename = report_filename(&entity_name(), &date.get_untracked());
        if let Err(e) = download_csv(&rows, &filename) {
            show_notice(notice, NoticeKind::Error, e);
        }
    };

    let can_submit = move || {
        selected_subject.get().is_some() && selected_object.get().is_none() && !is_submitting.get()
    };
    let editable = Signal::derive(move || {
        selected_subject.get().is_some() && selected_object.get().is_none()
    });

    let select_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; min-width: 200px;";
    let button_primary = "padding: 6px 14px; border: none; border-radius: 4px; background: #0b5ed7; color: #fff; cursor: pointer; font-size: 0.875rem;";
    let button_secondary = "padding: 6px 14px; border: 1px solid #ced4da; border-radius: 4px; background: #fff; cursor: pointer; font-size: 0.875rem;";

    view! {
        <div class="page">
            <div class="header" style="margin-bottom: 12px;">
                <h1 class="header__title" style="margin: 0 0 10px; font-size: 1.125rem;">
                    "Суточный план"
                </h1>
                <div style="display: flex; align-items: center; gap: 10px; flex-wrap: wrap;">
                    <DaySelector
                        value=date
                        on_select=Callback::new(move |d: String| set_date.set(d))
                    />
                    <select
                        style=select_style
                        on:change=move |ev| {
                            set_selected_subject.set(event_target_value(&ev).parse::<i64>().ok());
                        }
                    >
                        <option value="" selected=move || selected_subject.get().is_none()>
                            "— субъект —"
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
                                            selected=move || selected_subject.get() == Some(subject_id)
                                        >
                                            {subject.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <select
                        style=select_style
                        on:change=move |ev| {
                            set_selected_object.set(event_target_value(&ev).parse::<i64>().ok());
                        }
                    >
                        <option value="" selected=move || selected_object.get().is_none()>
                            "— весь субъект —"
                        </option>
                        {move || {
                            objects
                                .get()
                                .into_iter()
                                .map(|object| {
                                    let object_id = object.id;
                                    view! {
                                        <option
                                            value=object_id.to_string()
                                            selected=move || selected_object.get() == Some(object_id)
                                        >
                                            {object.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            // Статусы субъекта и его объектов на выбранные сутки
            <div style="display: flex; gap: 14px; flex-wrap: wrap; margin-bottom: 10px;">
                {move || {
                    let map = statuses.get();
                    let mut chips: Vec<(String, DayStatus)> = Vec::new();
                    if let Some(subject_id) = selected_subject.get() {
                        let name = subjects
                            .get()
                            .into_iter()
                            .find(|s| s.id == subject_id)
                            .map(|s| s.name)
                            .unwrap_or_else(|| format!("Субъект №{}", subject_id));
                        let status = map
                            .get(&EntityRef::Subject(subject_id))
                            .copied()
                            .unwrap_or(DayStatus::Unavailable);
                        chips.push((name, status));
                    }
                    for object in objects.get() {
                        let status = map
                            .get(&EntityRef::Object(object.id))
                            .copied()
                            .unwrap_or(DayStatus::Unavailable);
                        chips.push((object.name, status));
                    }
                    chips
                        .into_iter()
                        .map(|(name, status)| {
                            view! {
                                <span style="display: inline-flex; align-items: center; gap: 6px; font-size: 0.8125rem;">
                                    {name}
                                    <StatusBadge status=Signal::derive(move || status) />
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <NoticeBanner slot=notice />

            <div style="display: flex; gap: 8px; margin-bottom: 12px; flex-wrap: wrap;">
                <button
                    style=button_primary
                    disabled=move || !can_submit()
                    on:click=move |_| submit(PlanIntent::Save)
                >
                    "Сохранить"
                </button>
                <button
                    style=button_primary
                    disabled=move || !can_submit()
                    on:click=move |_| submit(PlanIntent::Approve)
                >
                    "Рассчитать и согласовать"
                </button>
                <ImportControl
                    on_imported=Callback::new(move |imported: PlanGrid| {
                        grid.set(imported);
                        show_notice(notice, NoticeKind::Success, "Файл импортирован");
                    })
                    on_error=Callback::new(move |e: String| {
                        show_notice(notice, NoticeKind::Error, e);
                    })
                />
                <button style=button_secondary on:click=handle_export>
                    "Экспорт"
                </button>
            </div>

            <PlanTable grid=grid editable=editable />
        </div>
    }
}
