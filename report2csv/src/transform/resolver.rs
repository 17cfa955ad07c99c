//! Column label resolution.
//!
//! `detailColumns` defines the positional index space of every row's cells.
//! [`build_column_index`] labels that index space through
//! `detailColumnInfo`, and [`resolve_targets`] turns the requested header
//! labels into the ordered list of cell positions to extract.
//!
//! ```text
//! detailColumns      ["c1", "c2", "c3"]
//! detailColumnInfo   c1 -> Name, c2 -> Amount, c3 -> Region
//! column index       Name -> 0, Amount -> 1, Region -> 2
//! header spec        ["Region", "Name"]  ->  targets [2, 0]
//! ```

use std::collections::HashMap;

use crate::error::{ReportError, ReportResult, ResolveError, ResolveResult};
use crate::models::{ReportExtendedMetadata, ReportMetadata};
use crate::normalize::normalize;

/// Normalized label -> cell position.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
    /// Distinct labels in first-seen column order.
    labels: Vec<String>,
}

impl ColumnIndex {
    /// Record `label` at `position`. A repeated label keeps its first-seen
    /// place in [`labels`](Self::labels) but takes the new position.
    pub fn insert(&mut self, label: String, position: usize) {
        if let Some(previous) = self.positions.insert(label.clone(), position) {
            tracing::debug!(%label, previous, position, "duplicate column label, keeping last");
        } else {
            self.labels.push(label);
        }
    }

    /// Position of a normalized label.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Distinct labels in report column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the label -> position map from report metadata.
///
/// Each key of `detailColumns` is looked up in `detailColumnInfo`; a key
/// without a descriptor or a descriptor without a label is an error.
pub fn build_column_index(
    metadata: &ReportMetadata,
    extended: &ReportExtendedMetadata,
) -> ReportResult<ColumnIndex> {
    let mut index = ColumnIndex::default();

    for (position, key) in metadata.detail_columns.iter().enumerate() {
        let info = extended
            .detail_column_info
            .get(key)
            .ok_or_else(|| ReportError::MissingColumnInfo(key.clone()))?;
        let label = info
            .label
            .as_deref()
            .ok_or_else(|| ReportError::MissingColumnLabel(key.clone()))?;

        index.insert(normalize(label), position);
    }

    Ok(index)
}

/// Map each requested label to its cell position, preserving request order.
///
/// Fails on the first label the report does not have.
pub fn resolve_targets(labels: &[String], index: &ColumnIndex) -> ResolveResult<Vec<usize>> {
    labels
        .iter()
        .map(|label| {
            index.get(label).ok_or_else(|| ResolveError::MissingColumn {
                label: label.clone(),
                available: index.labels().to_vec(),
            })
        })
        .collect()
}
