//! Row extraction.
//!
//! Walks every row of every fact map group and pulls the cells at the
//! resolved target positions. Malformed rows are dropped and recorded in
//! [`ExtractResult::skipped`]; they never abort the run. Positions beyond a
//! row's cell count read as the empty cell.

use crate::models::{Cell, ReportDocument, Row, SkipReason};

/// One output field. `None` is written as an empty field.
pub type Field = Option<String>;

/// Which cell field is written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CellValuePolicy {
    /// Always the display label.
    #[default]
    Label,
    /// The raw value when present and non-empty, otherwise the label.
    ValueOrLabel,
}

impl CellValuePolicy {
    /// Pick the output field from a cell.
    pub fn pick(&self, cell: &Cell) -> Field {
        match self {
            Self::Label => cell.label.clone(),
            Self::ValueOrLabel => match &cell.value {
                Some(value) if !value.is_empty() => Some(value.clone()),
                _ => cell.label.clone(),
            },
        }
    }
}

/// A raw row entry that produced no output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Fact map group key.
    pub group: String,
    /// Position of the entry within the group's `rows`.
    pub row: usize,
    pub reason: SkipReason,
}

/// Result of extracting rows from a report.
#[derive(Debug, Default)]
pub struct ExtractResult {
    /// Output rows, each aligned with the target positions.
    pub rows: Vec<Vec<Field>>,
    /// Entries dropped for not having the row shape.
    pub skipped: Vec<SkippedRow>,
    /// Groups that carried no `rows` list.
    pub groups_without_rows: usize,
}

impl ExtractResult {
    /// Get summary statistics
    pub fn summary(&self) -> String {
        format!(
            "Extracted: {} rows, {} skipped, {} groups without rows",
            self.rows.len(),
            self.skipped.len(),
            self.groups_without_rows
        )
    }
}

/// Extract the fields at `targets` from one validated row.
pub fn extract_row(row: &Row, targets: &[usize], policy: CellValuePolicy) -> Vec<Field> {
    targets
        .iter()
        .map(|&index| policy.pick(&row.cell_or_empty(index)))
        .collect()
}

/// Extract output rows from every group of the report's fact map.
pub fn extract_rows(
    report: &ReportDocument,
    targets: &[usize],
    policy: CellValuePolicy,
) -> ExtractResult {
    let mut result = ExtractResult::default();

    for group in report.groups() {
        let Some(rows) = group.rows else {
            result.groups_without_rows += 1;
            continue;
        };

        for (position, raw) in rows.iter().enumerate() {
            match Row::from_value(raw) {
                Ok(row) => result.rows.push(extract_row(&row, targets, policy)),
                Err(reason) => {
                    tracing::debug!(group = group.key, row = position, %reason, "skipping row");
                    result.skipped.push(SkippedRow {
                        group: group.key.to_string(),
                        row: position,
                        reason,
                    });
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(fact_map: serde_json::Value) -> ReportDocument {
        serde_json::from_value(json!({
            "reportMetadata": { "detailColumns": ["c1", "c2", "c3"] },
            "reportExtendedMetadata": { "detailColumnInfo": {} },
            "factMap": fact_map
        }))
        .unwrap()
    }

    fn text(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(|f| f.as_deref().unwrap_or("")).collect()
    }

    #[test]
    fn test_fields_follow_target_order() {
        let doc = report(json!({
            "T!T": { "rows": [
                { "dataCells": [ { "label": "Alice" }, { "label": "100" }, { "label": "East" } ] },
                { "dataCells": [ { "label": "Bob" }, { "label": "250" }, { "label": "West" } ] }
            ] }
        }));

        let result = extract_rows(&doc, &[2, 0, 1], CellValuePolicy::Label);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(text(&result.rows[0]), vec!["East", "Alice", "100"]);
        assert_eq!(text(&result.rows[1]), vec!["West", "Bob", "250"]);
    }

    #[test]
    fn test_short_row_padded_with_empty() {
        let doc = report(json!({
            "T!T": { "rows": [ { "dataCells": [ { "label": "Alice" } ] } ] }
        }));

        let result = extract_rows(&doc, &[0, 1, 2], CellValuePolicy::Label);
        assert_eq!(result.rows, vec![vec![Some("Alice".to_string()), None, None]]);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let doc = report(json!({
            "0!T": { "rows": [
                "not a row",
                { "noCells": true },
                { "dataCells": { "label": "x" } },
                { "dataCells": [ { "label": "kept" } ] }
            ] }
        }));

        let result = extract_rows(&doc, &[0], CellValuePolicy::Label);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(text(&result.rows[0]), vec!["kept"]);

        let reasons: Vec<_> = result.skipped.iter().map(|s| (s.row, s.reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (0, SkipReason::NotAnObject),
                (1, SkipReason::MissingDataCells),
                (2, SkipReason::DataCellsNotAList),
            ]
        );
        assert!(result.skipped.iter().all(|s| s.group == "0!T"));
    }

    #[test]
    fn test_groups_without_rows() {
        let doc = report(json!({
            "T!T": { "aggregates": [ { "label": "3", "value": 3 } ] },
            "0!T": { "rows": [] }
        }));

        let result = extract_rows(&doc, &[0], CellValuePolicy::Label);
        assert!(result.rows.is_empty());
        assert_eq!(result.groups_without_rows, 1);
    }

    #[test]
    fn test_rows_from_every_group() {
        let doc = report(json!({
            "0!T": { "rows": [ { "dataCells": [ { "label": "a" } ] } ] },
            "1!T": { "rows": [ { "dataCells": [ { "label": "b" } ] } ] }
        }));

        let result = extract_rows(&doc, &[0], CellValuePolicy::Label);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.summary(), "Extracted: 2 rows, 0 skipped, 0 groups without rows");
    }

    #[test]
    fn test_missing_label_is_empty() {
        let row = Row::from_value(&json!({ "dataCells": [ { "value": 5 } ] })).unwrap();
        assert_eq!(extract_row(&row, &[0], CellValuePolicy::Label), vec![None]);
    }

    #[test]
    fn test_value_or_label_policy() {
        let row = Row::from_value(&json!({ "dataCells": [
            { "label": "$1,000", "value": 1000 },
            { "label": "Acme", "value": "" },
            { "label": "-" }
        ] }))
        .unwrap();

        assert_eq!(
            extract_row(&row, &[0, 1, 2], CellValuePolicy::ValueOrLabel),
            vec![Some("1000".into()), Some("Acme".into()), Some("-".into())]
        );
        assert_eq!(
            extract_row(&row, &[0], CellValuePolicy::default()),
            vec![Some("$1,000".into())]
        );
    }
}
