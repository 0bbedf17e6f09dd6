use crate::shared::api_utils::put_json;
use contracts::domain::a004_spec_sheet::aggregate::{SpecSheet, SpecSheetKey, SpecSheetUpdate};
use contracts::domain::common::{AggregateId, AggregateRoot};
use std::collections::BTreeMap;

/// Submit the serialized draft.
pub async fn update_spec_sheet(key: SpecSheetKey, update: &SpecSheetUpdate) -> Result<(), String> {
    put_json(
        &format!("/api/{}/{}", SpecSheet::collection_name(), key.as_string()),
        update,
    )
    .await
}

/// Extract the backend's field-error payload (`{"errors": {...}}`) from a
/// failed response body, translated to this form's field keys. `None` when
/// the body is anything else.
pub fn field_errors_from(body: &str) -> Option<BTreeMap<String, String>> {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        errors: Option<BTreeMap<String, String>>,
    }

    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    parsed.errors.map(|errors| {
        errors
            .into_iter()
            .map(|(key, message)| (translate_error_key(&key), message))
            .collect()
    })
}

/// The backend names fields in its own wire vocabulary; map the known ones
/// onto the draft's keys and pass the rest through untouched.
fn translate_error_key(key: &str) -> String {
    match key {
        "id_producto" => "product".to_string(),
        "descripcion" => "summary".to_string(),
        "insumos" => "supplies_note".to_string(),
        _ => {
            if let Some(index) = key.strip_prefix("id_insumo_") {
                format!("supply_{index}")
            } else if let Some(index) = key.strip_prefix("cantidad_") {
                format!("quantity_{index}")
            } else {
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_translates_field_errors() {
        let body = r#"{"errors":{"id_producto":"requerido","cantidad_1":"requerida","otro":"x"}}"#;
        let errors = field_errors_from(body).unwrap();
        assert_eq!(errors.get("product").unwrap(), "requerido");
        assert_eq!(errors.get("quantity_1").unwrap(), "requerida");
        assert_eq!(errors.get("otro").unwrap(), "x");
    }

    #[test]
    fn non_json_bodies_yield_none() {
        assert!(field_errors_from("HTTP 500").is_none());
        assert!(field_errors_from("{\"message\":\"boom\"}").is_none());
    }
}
