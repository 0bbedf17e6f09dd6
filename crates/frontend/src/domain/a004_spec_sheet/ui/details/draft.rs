//! Editable spec sheet draft.
//!
//! No derived amounts here; what this draft enforces is the supply-line
//! policy: a supply item may appear at most once per sheet.

use contracts::domain::a002_product::aggregate::ProductKey;
use contracts::domain::a003_supply_item::aggregate::SupplyKey;
use contracts::domain::a004_spec_sheet::aggregate::{
    SpecSheet, SpecSheetKey, SpecSheetLineUpdate, SpecSheetUpdate,
};
use contracts::domain::common::AggregateId;
use std::collections::BTreeMap;

/// One editable supply line.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecLineDraft {
    pub supply_key: Option<SupplyKey>,

    /// `None` while the input is blank. Negative or non-numeric input is
    /// ignored and leaves the previous value in place.
    pub quantity: Option<f64>,
}

/// In-memory draft of one spec sheet being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSheetDraft {
    pub key: SpecSheetKey,
    pub product_key: Option<ProductKey>,
    pub summary: String,
    pub supplies_note: String,
    pub lines: Vec<SpecLineDraft>,
}

impl SpecSheetDraft {
    pub fn from_snapshot(sheet: &SpecSheet) -> Self {
        Self {
            key: sheet.key,
            product_key: Some(sheet.product_key),
            summary: sheet.summary.clone(),
            supplies_note: sheet.supplies_note.clone(),
            lines: sheet
                .lines
                .iter()
                .map(|line| SpecLineDraft {
                    supply_key: Some(line.supply_key),
                    quantity: Some(line.quantity),
                })
                .collect(),
        }
    }

    pub fn set_product(&mut self, raw: &str) {
        self.product_key = ProductKey::from_string(raw).ok();
    }

    pub fn set_summary(&mut self, value: &str) {
        self.summary = value.to_string();
    }

    pub fn set_supplies_note(&mut self, value: &str) {
        self.supplies_note = value.to_string();
    }

    pub fn set_line_supply(&mut self, index: usize, raw: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.supply_key = SupplyKey::from_string(raw).ok();
        }
    }

    pub fn set_line_quantity(&mut self, index: usize, raw: &str) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            line.quantity = None;
            return;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value >= 0.0 => line.quantity = Some(value),
            _ => {}
        }
    }

    /// A supply item referenced by more than one line.
    pub fn has_duplicate_supplies(&self) -> bool {
        let keys: Vec<SupplyKey> = self.lines.iter().filter_map(|l| l.supply_key).collect();
        keys.iter()
            .enumerate()
            .any(|(index, key)| keys[..index].contains(key))
    }

    /// Append a blank line, refused while a duplicate supply reference
    /// exists (the user must resolve it first).
    pub fn add_line(&mut self) -> Result<(), String> {
        if self.has_duplicate_supplies() {
            return Err("No se pueden agregar insumos duplicados.".to_string());
        }
        self.lines.push(SpecLineDraft {
            supply_key: None,
            quantity: None,
        });
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Field-keyed validation errors; empty means submittable. A zero
    /// quantity counts as missing, and duplicates introduced by editing an
    /// existing line are caught here as well.
    pub fn validate(&self) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();

        if self.product_key.map(|key| key.value()).unwrap_or(0) == 0 {
            errors.insert(
                "product".to_string(),
                "El producto es requerido".to_string(),
            );
        }
        if self.summary.trim().is_empty() {
            errors.insert(
                "summary".to_string(),
                "La descripción es requerida".to_string(),
            );
        }
        if self.supplies_note.trim().is_empty() {
            errors.insert(
                "supplies_note".to_string(),
                "Los insumos son requeridos".to_string(),
            );
        }
        for (index, line) in self.lines.iter().enumerate() {
            if line.supply_key.map(|key| key.value()).unwrap_or(0) == 0 {
                errors.insert(
                    format!("supply_{index}"),
                    "El insumo es requerido".to_string(),
                );
            }
            if line.quantity.unwrap_or(0.0) == 0.0 {
                errors.insert(
                    format!("quantity_{index}"),
                    "La cantidad es requerida".to_string(),
                );
            }
        }
        if self.has_duplicate_supplies() {
            errors.insert(
                "lines".to_string(),
                "No se pueden agregar insumos duplicados.".to_string(),
            );
        }

        errors
    }

    /// Serialize for the update request. Assumes `validate()` passed.
    pub fn to_update(&self) -> SpecSheetUpdate {
        SpecSheetUpdate {
            product_key: self.product_key.map(|key| key.value()).unwrap_or(0),
            summary: self.summary.clone(),
            supplies_note: self.supplies_note.clone(),
            lines: self
                .lines
                .iter()
                .map(|line| SpecSheetLineUpdate {
                    supply_key: line.supply_key.map(|key| key.value()).unwrap_or(0),
                    quantity: line.quantity.unwrap_or(0.0),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_spec_sheet::aggregate::SpecSheetLine;

    fn snapshot() -> SpecSheet {
        SpecSheet {
            key: SpecSheetKey(4),
            product_key: ProductKey(11),
            summary: "Torta de chocolate".to_string(),
            supplies_note: "Harina, cacao y huevos".to_string(),
            lines: vec![
                SpecSheetLine {
                    supply_key: SupplyKey(2),
                    quantity: 0.5,
                },
                SpecSheetLine {
                    supply_key: SupplyKey(9),
                    quantity: 3.0,
                },
            ],
        }
    }

    #[test]
    fn snapshot_round_trips_into_a_valid_draft() {
        let draft = SpecSheetDraft::from_snapshot(&snapshot());
        assert_eq!(draft.lines.len(), 2);
        assert!(draft.validate().is_empty());

        let update = draft.to_update();
        assert_eq!(update.product_key, 11);
        assert_eq!(update.lines.len(), 2);
        assert_eq!(update.lines[0].supply_key, 2);
        assert_eq!(update.lines[0].quantity, 0.5);
    }

    #[test]
    fn add_line_is_refused_while_duplicates_exist() {
        let mut draft = SpecSheetDraft::from_snapshot(&snapshot());
        assert!(draft.add_line().is_ok());
        assert_eq!(draft.lines.len(), 3);

        draft.set_line_supply(2, "2"); // same supply as line 0
        assert!(draft.has_duplicate_supplies());
        assert!(draft.add_line().is_err());
        assert_eq!(draft.lines.len(), 3);
    }

    #[test]
    fn duplicates_introduced_by_editing_fail_validation() {
        let mut draft = SpecSheetDraft::from_snapshot(&snapshot());
        draft.set_line_supply(1, "2");
        let errors = draft.validate();
        assert!(errors.contains_key("lines"));
    }

    #[test]
    fn blank_lines_do_not_count_as_duplicates() {
        let mut draft = SpecSheetDraft::from_snapshot(&snapshot());
        assert!(draft.add_line().is_ok());
        assert!(draft.add_line().is_ok());
        assert!(!draft.has_duplicate_supplies());
    }

    #[test]
    fn validate_requires_header_fields_and_line_fields() {
        let mut draft = SpecSheetDraft::from_snapshot(&snapshot());
        draft.set_product("");
        draft.set_summary("  ");
        draft.set_supplies_note("");
        let _ = draft.add_line();

        let errors = draft.validate();
        assert!(errors.contains_key("product"));
        assert!(errors.contains_key("summary"));
        assert!(errors.contains_key("supplies_note"));
        assert!(errors.contains_key("supply_2"));
        assert!(errors.contains_key("quantity_2"));
    }

    #[test]
    fn quantity_input_ignores_negative_and_garbage() {
        let mut draft = SpecSheetDraft::from_snapshot(&snapshot());

        draft.set_line_quantity(0, "-1");
        assert_eq!(draft.lines[0].quantity, Some(0.5));

        draft.set_line_quantity(0, "abc");
        assert_eq!(draft.lines[0].quantity, Some(0.5));

        draft.set_line_quantity(0, "2.25");
        assert_eq!(draft.lines[0].quantity, Some(2.25));

        draft.set_line_quantity(0, "");
        assert_eq!(draft.lines[0].quantity, None);
    }

    #[test]
    fn remove_line_clears_a_duplicate() {
        let mut draft = SpecSheetDraft::from_snapshot(&snapshot());
        draft.set_line_supply(1, "2");
        assert!(draft.has_duplicate_supplies());
        draft.remove_line(1);
        assert!(!draft.has_duplicate_supplies());
        assert_eq!(draft.lines.len(), 1);
    }
}
