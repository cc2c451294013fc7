//! Сводный отчёт: таблица субъекта и по одной таблице на каждый его
//! объект, сериализованные в единый многосекционный лист. Это чистая
//! выгрузка для презентации, обратного разбора у формата нет.

use contracts::domain::hour::Hour;
use contracts::domain::object::EnergyObject;
use contracts::domain::subject::Subject;

use super::grid::PlanGrid;
use crate::shared::number_format::format_mwh;

const BASE_COLUMNS: [&str; 6] = ["Час", "P1", "P2", "P3", "F1", "F2"];
const GENERATION_COLUMNS: [&str; 5] = ["P1 ген", "P2 ген", "P3 ген", "F1 ген", "F2 ген"];

/// Многосекционный лист: секция субъекта, затем секции объектов,
/// разделённые пустой строкой. Колонки генерации включаются только
/// для генерирующих сущностей.
pub fn combined_report(
    subject: &Subject,
    subject_hours: &[Hour],
    objects: &[(EnergyObject, Vec<Hour>)],
) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    append_section(
        &mut rows,
        &format!("Субъект: {}", subject.name),
        subject_hours,
        subject.is_generation(),
    );
    for (object, hours) in objects {
        rows.push(Vec::new());
        append_section(
            &mut rows,
            &format!("Объект: {}", object.name),
            hours,
            object.is_generation(),
        );
    }
    rows
}

fn append_section(rows: &mut Vec<Vec<String>>, title: &str, hours: &[Hour], with_generation: bool) {
    rows.push(vec![title.to_string()]);

    let mut header: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
    if with_generation {
        header.extend(GENERATION_COLUMNS.iter().map(|c| c.to_string()));
    }
    rows.push(header);

    let grid = PlanGrid::from_hours(hours);
    let value_count = if with_generation { 10 } else { 5 };
    let mut totals = vec![0.0; value_count];

    for (i, row) in grid.rows().iter().enumerate() {
        let mut values = vec![row.p1, row.p2, row.p3, row.f1, row.f2];
        if with_generation {
            values.extend([row.p1_gen, row.p2_gen, row.p3_gen, row.f1_gen, row.f2_gen]);
        }
        for (total, value) in totals.iter_mut().zip(&values) {
            *total += value;
        }
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(values.iter().map(|v| format_mwh(*v)));
        rows.push(cells);
    }

    let mut total_row = vec!["Итого".to_string()];
    total_row.extend(totals.iter().map(|v| format_mwh(*v)));
    rows.push(total_row);
}

/// Имя файла выгрузки из имени сущности и периода
pub fn report_filename(entity_name: &str, period: &str) -> String {
    let safe: String = entity_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_{}.csv", safe.trim_matches('_'), period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::object::ObjectType;
    use contracts::domain::subject::SubjectType;

    fn subject(subject_type: SubjectType) -> Subject {
        Subject {
            id: 7,
            name: "АО Станция".into(),
            bin: "123456789012".into(),
            subject_type,
            providers: Vec::new(),
        }
    }

    fn object(name: &str) -> EnergyObject {
        EnergyObject {
            id: 1,
            name: name.into(),
            eic_code: "KZ0000000000000X".into(),
            object_type: ObjectType::Consumption,
            subject_id: 7,
            zone: "Север".into(),
        }
    }

    fn hour_with_p1(hour: u8, p1: f64) -> Hour {
        Hour {
            id: hour as i64,
            day_id: 1,
            hour,
            p1,
            ..Default::default()
        }
    }

    // секция: заголовок + шапка + 24 часа + итог
    const SECTION_ROWS: usize = 27;

    #[test]
    fn consumer_report_has_base_columns_only() {
        let rows = combined_report(&subject(SubjectType::Consumer), &[], &[]);
        assert_eq!(rows.len(), SECTION_ROWS);
        assert_eq!(rows[1].len(), 6);
        assert_eq!(rows[1][0], "Час");
        assert!(!rows[1].iter().any(|c| c.contains("ген")));
    }

    #[test]
    fn generation_report_includes_generation_columns() {
        let rows = combined_report(&subject(SubjectType::Generation), &[], &[]);
        assert_eq!(rows[1].len(), 11);
        assert_eq!(rows[1][6], "P1 ген");
    }

    #[test]
    fn one_section_per_object() {
        let objects = vec![
            (object("ТП-1"), Vec::new()),
            (object("ТП-2"), Vec::new()),
        ];
        let rows = combined_report(&subject(SubjectType::Consumer), &[], &objects);
        // секции разделены пустой строкой
        assert_eq!(rows.len(), SECTION_ROWS + 2 * (SECTION_ROWS + 1));
        assert_eq!(rows[SECTION_ROWS], Vec::<String>::new());
        assert_eq!(rows[SECTION_ROWS + 1][0], "Объект: ТП-1");
    }

    #[test]
    fn totals_row_sums_hours() {
        let hours = vec![hour_with_p1(1, 100.0), hour_with_p1(2, 50.5)];
        let rows = combined_report(&subject(SubjectType::Consumer), &hours, &[]);
        let totals = rows.last().unwrap();
        assert_eq!(totals[0], "Итого");
        assert_eq!(totals[1], "150.50");
    }

    #[test]
    fn filename_is_sanitized() {
        assert_eq!(
            report_filename("АО Станция", "2024-03-05"),
            "АО_Станция_2024-03-05.csv"
        );
    }
}
