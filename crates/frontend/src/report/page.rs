use contracts::domain::hour::Hour;
use contracts::domain::object::EnergyObject;
use contracts::domain::subject::Subject;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::domain::object::model as object_model;
use crate::domain::subject::model as subject_model;
use crate::plan::fetch::{fetch_plan, EntityRef};
use crate::plan::report::{combined_report, report_filename};
use crate::shared::components::day_selector::DaySelector;
use crate::shared::components::notice::{show_notice, Notice, NoticeBanner, NoticeKind};
use crate::shared::date_utils::{format_date, parse_iso_date, today_iso};
use crate::shared::export::download_csv;

/// Сформированный отчёт: имя субъекта для заголовка файла и
/// готовые строки многосекционного листа
#[derive(Clone)]
struct ReportData {
    subject_name: String,
    period: String,
    rows: Vec<Vec<String>>,
}

/// Страница сводного отчёта: таблица субъекта и всех его объектов на
/// выбранные сутки с выгрузкой единым листом.
#[component]
pub fn ReportPage() -> impl IntoView {
    let (date, set_date) = signal(today_iso());
    let (subjects, set_subjects) = signal::<Vec<Subject>>(Vec::new());
    let (selected_subject, set_selected_subject) = signal::<Option<i64>>(None);
    let (report, set_report) = signal::<Option<ReportData>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let notice = RwSignal::new(Option::<Notice>::None);

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

    let build_report = move || {
        let Some(subject_id) = selected_subject.get_untracked() else {
            show_notice(notice, NoticeKind::Error, "Выберите субъект");
            return;
        };
        let date_iso = date.get_untracked();
        let Ok(plan_date) = parse_iso_date(&date_iso) else {
            show_notice(notice, NoticeKind::Error, "Некорректная дата");
            return;
        };
        let Some(subject) = subjects
            .get_untracked()
            .into_iter()
            .find(|s| s.id == subject_id)
        else {
            return;
        };

        set_is_loading.set(true);
        set_report.set(None);
        spawn_local(async move {
            let client = ApiClient::from_window();

            let subject_hours: Vec<Hour> =
                match fetch_plan(&client, plan_date, EntityRef::Subject(subject.id)).await {
                    Ok(data) => data.hours,
                    Err(e) => {
                        show_notice(
                            notice,
                            NoticeKind::Error,
                            format!("Ошибка загрузки плана субъекта: {}", e),
                        );
                        set_is_loading.set(false);
                        return;
                    }
                };

            let object_list: Vec<EnergyObject> =
                match object_model::fetch_subject_objects(subject.id).await {
                    Ok(list) => list,
                    Err(e) => {
                        log::error!("объекты субъекта {}: {}", subject.id, e);
                        Vec::new()
                    }
                };

            let mut objects_with_hours: Vec<(EnergyObject, Vec<Hour>)> = Vec::new();
            for object in object_list {
                let hours = match fetch_plan(&client, plan_date, EntityRef::Object(object.id)).await
                {
                    Ok(data) => data.hours,
                    Err(e) => {
                        // объект без данных попадает в отчёт пустой таблицей
                        log::error!("часы объекта {}: {}", object.id, e);
                        Vec::new()
                    }
                };
                objects_with_hours.push((object, hours));
            }

            let rows = combined_report(&subject, &subject_hours, &objects_with_hours);
            set_report.set(Some(ReportData {
                subject_name: subject.name.clone(),
                period: date_iso.clone(),
                rows,
            }));
            set_is_loading.set(false);
        });
    };

    let handle_export = move |_| {
        let Some(data) = report.get_untracked() else {
            return;
        };
        let filename = report_filename(&data.subject_name, &data.period);
        if let Err(e) = download_csv(&data.rows, &filename) {
            show_notice(notice, NoticeKind::Error, e);
        }
    };

    let select_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; min-width: 220px;";
    let button_primary = "padding: 6px 14px; border: none; border-radius: 4px; background: #0b5ed7; color: #fff; cursor: pointer; font-size: 0.875rem;";
    let button_secondary = "padding: 6px 14px; border: 1px solid #ced4da; border-radius: 4px; background: #fff; cursor: pointer; font-size: 0.875rem;";

    view! {
        <div class="page">
            <div class="header" style="margin-bottom: 12px;">
                <h1 class="header__title" style="margin: 0 0 10px; font-size: 1.125rem;">
                    "Сводный отчёт"
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
                    <button style=button_primary disabled=move || is_loading.get() on:click=move |_| build_report()>
                        {move || if is_loading.get() { "Формирование..." } else { "Сформировать" }}
                    </button>
                    <button
                        style=button_secondary
                        disabled=move || report.get().is_none()
                        on:click=handle_export
                    >
                        "Выгрузить"
                    </button>
                </div>
            </div>

            <NoticeBanner slot=notice />

            {move || {
                report
                    .get()
                    .map(|data| {
                        view! {
                            <div style="margin-bottom: 8px; color: #495057; font-size: 0.875rem;">
                                {format!(
                                    "{} за {}",
                                    data.subject_name,
                                    format_date(&data.period),
                                )}
                            </div>
                            <div class="table" style="overflow: auto;">
                                <table class="table__data" style="border-collapse: collapse; background: #fff; font-size: 0.8125rem;">
                                    <tbody>
                                        {data
                                            .rows
                                            .into_iter()
                                            .map(|row| {
                                                if row.is_empty() {
                                                    view! { <tr><td style="padding: 8px;"></td></tr> }.into_any()
                                                } else if row.len() == 1 {
                                                    view! {
                                                        <tr>
                                                            <td
                                                                colspan="11"
                                                                style="padding: 8px; font-weight: 600; background: #f1f3f5;"
                                                            >
                                                                {row[0].clone()}
                                                            </td>
                                                        </tr>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <tr>
                                                            {row
                                                                .into_iter()
                                                                .map(|cell| {
                                                                    view! {
                                                                        <td style="padding: 4px 10px; border-bottom: 1px solid #e9ecef; text-align: right; font-variant-numeric: tabular-nums;">
                                                                            {cell}
                                                                        </td>
                                                                    }
                                                                })
                                                                .collect_view()}
                                                        </tr>
                                                    }
                                                        .into_any()
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
