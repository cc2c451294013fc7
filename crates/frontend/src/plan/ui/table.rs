use leptos::prelude::*;

use super::super::grid::PlanGrid;
use crate::shared::number_format::format_mwh;

/// Значение редактируемой ячейки; нечисловой ввод обнуляет поле
fn parse_cell(value: &str) -> f64 {
    value.trim().replace(',', ".").parse().unwrap_or(0.0)
}

/// Почасовая таблица плана: зеркальные колонки сервера и редактируемые
/// коэффициент, объём и сообщение
#[component]
pub fn PlanTable(grid: RwSignal<PlanGrid>, #[prop(into)] editable: Signal<bool>) -> impl IntoView {
    let numeric_input_style = "width: 90px; padding: 4px 6px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.8125rem; text-align: right;";
    let text_input_style = "width: 160px; padding: 4px 6px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.8125rem;";
    let cell_style = "padding: 4px 8px; border-bottom: 1px solid #e9ecef; text-align: right; font-variant-numeric: tabular-nums;";
    let header_style = "padding: 6px 8px; border-bottom: 2px solid #dee2e6; text-align: right; font-size: 0.8125rem;";

    view! {
        <div class="table" style="overflow: auto;">
            <table class="table__data" style="border-collapse: collapse; background: #fff; font-size: 0.8125rem;">
                <thead class="table__head">
                    <tr>
                        <th style=header_style>"Час"</th>
                        <th style=header_style>"P1"</th>
                        <th style=header_style>"P2"</th>
                        <th style=header_style>"P3"</th>
                        <th style=header_style>"F1"</th>
                        <th style=header_style>"F2"</th>
                        <th style=header_style>"Коэффициент"</th>
                        <th style=header_style>"Объём"</th>
                        <th style=header_style>"Сообщение"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let current = grid.get();
                        (0..current.rows().len())
                            .map(|index| {
                                let row = current.rows()[index].clone();
                                let p2 = current.p2_display(index);
                                view! {
                                    <tr class="table__row">
                                        <td style=cell_style>{index + 1}</td>
                                        <td style=cell_style>{format_mwh(row.p1)}</td>
                                        <td style=cell_style title=row.p2_message.clone()>
                                            {format_mwh(p2)}
                                        </td>
                                        <td style=cell_style>{format_mwh(row.p3)}</td>
                                        <td style=cell_style>{format_mwh(row.f1)}</td>
                                        <td style=cell_style>{format_mwh(row.f2)}</td>
                                        <td style=cell_style>
                                            <input
                                                type="text"
                                                style=numeric_input_style
                                                prop:value=row.coefficient.to_string()
                                                disabled=move || !editable.get()
                                                on:change=move |ev| {
                                                    let value = parse_cell(&event_target_value(&ev));
                                                    grid.update(|g| g.set_coefficient(index, value));
                                                }
                                            />
                                        </td>
                                        <td style=cell_style>
                                            <input
                                                type="text"
                                                style=numeric_input_style
                                                prop:value=row.volume.to_string()
                                                disabled=move || !editable.get()
                                                on:change=move |ev| {
                                                    let value = parse_cell(&event_target_value(&ev));
                                                    grid.update(|g| g.set_volume(index, value));
                                                }
                                            />
                                        </td>
                                        <td style=cell_style>
                                            <input
                                                type="text"
                                                style=text_input_style
                                                prop:value=row.message.clone()
                                                disabled=move || !editable.get()
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    grid.update(|g| g.set_message(index, value));
                                                }
                                            />
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
