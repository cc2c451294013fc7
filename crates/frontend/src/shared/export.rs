//! Выгрузка табличных данных в CSV-файл через Blob и временную ссылку

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Сериализует строки ячеек в CSV и инициирует скачивание файла
pub fn download_csv(rows: &[Vec<String>], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Нет данных для выгрузки".to_string());
    }

    // UTF-8 BOM, иначе Excel ломает кириллицу
    let mut content = String::from('\u{FEFF}');
    for row in rows {
        let escaped: Vec<String> = row.iter().map(|cell| escape_cell(cell)).collect();
        content.push_str(&escaped.join(","));
        content.push('\n');
    }

    let blob = csv_blob(&content)?;
    trigger_download(&blob, filename)
}

/// Ячейка оборачивается в кавычки, если содержит разделитель,
/// кавычки или перевод строки
fn escape_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn csv_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn trigger_download(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.set_attribute("style", "display: none");

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cell_is_untouched() {
        assert_eq!(escape_cell("160.00"), "160.00");
    }

    #[test]
    fn separator_and_quotes_are_escaped() {
        assert_eq!(escape_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
