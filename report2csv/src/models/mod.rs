//! Typed records for the analytics report export.
//!
//! The report JSON is deserialized once into these records:
//!
//! - [`ReportDocument`] - The whole export (metadata + fact map)
//! - [`ReportMetadata`] - Ordered detail column keys
//! - [`ColumnInfo`] - Human-readable descriptor of one detail column
//! - [`FactGroup`] - One grouping of the fact map, optionally holding rows
//! - [`Row`] - Cells of one detail row, aligned with the detail columns
//! - [`Cell`] - One cell (display label + raw value)
//!
//! Rows stay as raw JSON inside the fact map until [`Row::from_value`]
//! validates them, so one malformed row never fails the whole document.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Report Document
// =============================================================================

/// The analytics report export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub report_metadata: ReportMetadata,
    pub report_extended_metadata: ReportExtendedMetadata,
    /// Group key -> group object. Document order is preserved.
    pub fact_map: Map<String, Value>,
}

impl ReportDocument {
    /// Iterate the fact map groups in document order.
    pub fn groups(&self) -> impl Iterator<Item = FactGroup<'_>> {
        self.fact_map
            .iter()
            .map(|(key, value)| FactGroup::from_value(key, value))
    }
}

/// `reportMetadata` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// Report name, used only for logging.
    #[serde(default)]
    pub name: Option<String>,
    /// Column keys in the positional order of each row's cells.
    pub detail_columns: Vec<String>,
}

/// `reportExtendedMetadata` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExtendedMetadata {
    /// Column key -> descriptor.
    #[serde(default)]
    pub detail_column_info: HashMap<String, ColumnInfo>,
}

/// Descriptor of one detail column.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    /// Display label. Optional here so that unused descriptors without a
    /// label do not reject the document.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
}

// =============================================================================
// Fact Map
// =============================================================================

/// One group of the fact map.
#[derive(Debug, Clone, Copy)]
pub struct FactGroup<'a> {
    pub key: &'a str,
    /// Raw row entries, `None` when the group carries no `rows` list.
    pub rows: Option<&'a [Value]>,
}

impl<'a> FactGroup<'a> {
    /// Build a group view from its raw JSON value.
    ///
    /// Groups that are not objects, or whose `rows` is absent or not a list,
    /// are treated as carrying no rows.
    pub fn from_value(key: &'a str, value: &'a Value) -> Self {
        let rows = value
            .get("rows")
            .and_then(Value::as_array)
            .map(Vec::as_slice);
        Self { key, rows }
    }
}

// =============================================================================
// Rows and Cells
// =============================================================================

/// Why a raw row entry was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Entry is not a JSON object.
    NotAnObject,
    /// Object has no `dataCells` field.
    MissingDataCells,
    /// `dataCells` is present but not a list.
    DataCellsNotAList,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "row is not an object"),
            Self::MissingDataCells => write!(f, "row has no dataCells"),
            Self::DataCellsNotAList => write!(f, "dataCells is not a list"),
        }
    }
}

/// A validated detail row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub data_cells: Vec<Cell>,
}

impl Row {
    /// Validate a raw row entry.
    pub fn from_value(value: &Value) -> Result<Self, SkipReason> {
        let obj = value.as_object().ok_or(SkipReason::NotAnObject)?;
        let cells = obj
            .get("dataCells")
            .ok_or(SkipReason::MissingDataCells)?
            .as_array()
            .ok_or(SkipReason::DataCellsNotAList)?;

        Ok(Self {
            data_cells: cells.iter().map(Cell::from_value).collect(),
        })
    }

    /// Cell at `index`, or the empty placeholder when out of bounds.
    pub fn cell_or_empty(&self, index: usize) -> Cell {
        self.data_cells.get(index).cloned().unwrap_or_default()
    }
}

/// One cell of a detail row.
///
/// `None` marks an absent (or `null`) field. It is written as an empty field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Display text.
    pub label: Option<String>,
    /// Raw value.
    pub value: Option<String>,
}

impl Cell {
    /// Placeholder used for indexes beyond a row's cell count.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read a cell from raw JSON. Non-object cells read as empty.
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(obj) => Self {
                label: obj.get("label").and_then(scalar_text),
                value: obj.get("value").and_then(scalar_text),
            },
            None => Self::empty(),
        }
    }
}

/// Text form of a JSON field: strings verbatim, `null` as absent,
/// anything else as its JSON text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_from_value() {
        let raw = json!({
            "dataCells": [
                { "label": "Alice", "value": "001xx" },
                { "label": "$100.00", "value": { "amount": 100, "currency": "USD" } }
            ]
        });
        let row = Row::from_value(&raw).unwrap();

        assert_eq!(row.data_cells.len(), 2);
        assert_eq!(row.data_cells[0].label.as_deref(), Some("Alice"));
        assert_eq!(row.data_cells[1].label.as_deref(), Some("$100.00"));
        assert!(row.data_cells[1].value.as_deref().unwrap().contains("USD"));
    }

    #[test]
    fn test_malformed_rows_are_rejected() {
        assert_eq!(
            Row::from_value(&json!("not a row")),
            Err(SkipReason::NotAnObject)
        );
        assert_eq!(
            Row::from_value(&json!({ "other": 1 })),
            Err(SkipReason::MissingDataCells)
        );
        assert_eq!(
            Row::from_value(&json!({ "dataCells": "x" })),
            Err(SkipReason::DataCellsNotAList)
        );
    }

    #[test]
    fn test_cell_scalars() {
        let cell = Cell::from_value(&json!({ "label": 42, "value": null }));
        assert_eq!(cell.label.as_deref(), Some("42"));
        assert_eq!(cell.value, None);

        let cell = Cell::from_value(&json!({ "value": true }));
        assert_eq!(cell.label, None);
        assert_eq!(cell.value.as_deref(), Some("true"));

        assert_eq!(Cell::from_value(&json!(["x"])), Cell::empty());
    }

    #[test]
    fn test_cell_or_empty_out_of_bounds() {
        let row = Row::from_value(&json!({ "dataCells": [{ "label": "a" }] })).unwrap();
        assert_eq!(row.cell_or_empty(0).label.as_deref(), Some("a"));
        assert_eq!(row.cell_or_empty(5), Cell::empty());
    }

    #[test]
    fn test_groups_without_rows() {
        let doc: ReportDocument = serde_json::from_value(json!({
            "reportMetadata": { "detailColumns": [] },
            "reportExtendedMetadata": { "detailColumnInfo": {} },
            "factMap": {
                "T!T": { "aggregates": [] },
                "0!T": { "rows": [] },
                "1!T": { "rows": null }
            }
        }))
        .unwrap();

        let groups: Vec<_> = doc.groups().collect();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key, "T!T");
        assert!(groups[0].rows.is_none());
        assert_eq!(groups[1].rows.map(<[Value]>::len), Some(0));
        assert!(groups[2].rows.is_none());
    }
}
