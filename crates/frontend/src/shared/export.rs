/// Spreadsheet export: builds an Excel-compatible CSV and hands it to the
/// browser as a download.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be written out as spreadsheet rows.
pub trait SpreadsheetExportable {
    /// Column headers, in output order.
    fn headers() -> Vec<&'static str>;

    /// One CSV row for this record, matching `headers` in length and order.
    fn to_row(&self) -> Vec<String>;
}

/// Export records as a CSV file and trigger a browser download.
pub fn export_csv<T: SpreadsheetExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }

    let csv_content = build_csv(data);
    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)
}

/// Assemble the CSV text: UTF-8 BOM (so Excel detects the encoding),
/// `;` separators, one header row, escaped cells.
pub fn build_csv<T: SpreadsheetExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item.to_row().iter().map(|cell| escape_cell(cell)).collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    csv_content
}

/// Quote a cell when it contains the separator, quotes or line breaks.
fn escape_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Download via a temporary anchor: append, click, remove, revoke the URL.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
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
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

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

    struct Row(&'static str, &'static str);

    impl SpreadsheetExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Columna A", "Columna B"]
        }

        fn to_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn builds_csv_with_bom_headers_and_rows() {
        let csv = build_csv(&[Row("uno", "dos"), Row("tres", "cuatro")]);
        assert_eq!(
            csv,
            "\u{FEFF}Columna A;Columna B\nuno;dos\ntres;cuatro\n"
        );
    }

    #[test]
    fn escapes_cells_with_separators_and_quotes() {
        assert_eq!(escape_cell("simple"), "simple");
        assert_eq!(escape_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn escaped_cells_flow_into_the_output() {
        let csv = build_csv(&[Row("a;b", "c")]);
        assert!(csv.contains("\"a;b\";c\n"));
    }
}
