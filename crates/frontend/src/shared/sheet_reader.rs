//! Чтение загруженного файла таблицы (xlsx/csv) в матрицу ячеек.
//! Разбор книги выполняет SheetJS; JS-функция объявлена в index.html.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// Разбирает книгу и возвращает первый лист как массив массивов ячеек
    #[wasm_bindgen(js_name = parseSheetFile, catch)]
    fn parse_sheet_file(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Читает файл и возвращает ячейки первого листа построчно
pub async fn read_sheet(file: web_sys::File) -> Result<Vec<Vec<String>>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Ошибка чтения файла: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let value = parse_sheet_file(&bytes).map_err(|e| format!("Ошибка разбора файла: {:?}", e))?;

    let cells: Vec<Vec<serde_json::Value>> = serde_wasm_bindgen::from_value(value)
        .map_err(|e| format!("Неожиданный формат данных листа: {}", e))?;

    Ok(cells
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect())
}

/// SheetJS отдаёт ячейки смешанных типов; числа и логические значения
/// приводятся к строке, null — к пустой ячейке
fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cells_normalize_to_strings() {
        assert_eq!(cell_to_string(json!(null)), "");
        assert_eq!(cell_to_string(json!("Hour")), "Hour");
        assert_eq!(cell_to_string(json!(1.5)), "1.5");
        assert_eq!(cell_to_string(json!(24)), "24");
    }
}
