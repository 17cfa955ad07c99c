//! High-level pipeline API: report + header specification -> CSV.
//!
//! Combines all steps: loading, label resolution, row extraction and
//! writing. Every fatal condition (unreadable input, unknown column label)
//! is raised before the output file is touched.
//!
//! # Example
//!
//! ```rust,no_run
//! use report2csv::{run, RunConfig};
//!
//! let config = RunConfig::from_positionals(&["report.json", "output_header.csv"])?;
//! let summary = run(&config)?;
//! println!("{} rows written to {}", summary.rows_written, summary.output.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::PathBuf;

use tracing::{info, info_span, warn};

use crate::config::RunConfig;
use crate::error::PipelineResult;
use crate::models::ReportDocument;
use crate::parser::{load_header_spec, load_report};
use crate::transform::extractor::{extract_rows, CellValuePolicy, ExtractResult};
use crate::transform::resolver::{build_column_index, resolve_targets};
use crate::writer::write_csv;

/// In-memory result of converting a loaded report.
#[derive(Debug)]
pub struct Conversion {
    /// Output header, the normalized requested labels.
    pub header: Vec<String>,
    /// Cell position behind each header label.
    pub targets: Vec<usize>,
    pub extract: ExtractResult,
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    pub rows_written: usize,
    pub skipped_rows: usize,
    pub groups_without_rows: usize,
    /// Encoding the header specification was read with.
    pub header_encoding: String,
}

/// Resolve `labels` against the report and extract the matching rows.
///
/// No I/O; fails only when a label is missing from the report or the
/// report metadata is inconsistent.
pub fn convert(
    report: &ReportDocument,
    labels: Vec<String>,
    policy: CellValuePolicy,
) -> PipelineResult<Conversion> {
    let index = build_column_index(&report.report_metadata, &report.report_extended_metadata)?;
    info!(columns = index.len(), "built column index");

    let targets = resolve_targets(&labels, &index)?;
    let extract = extract_rows(report, &targets, policy);
    info!("{}", extract.summary());

    Ok(Conversion {
        header: labels,
        targets,
        extract,
    })
}

/// Run a full conversion: read both inputs, convert, write the output file.
pub fn run(config: &RunConfig) -> PipelineResult<RunSummary> {
    let _span = info_span!("convert", report = %config.report.display()).entered();

    let report = load_report(&config.report)?;
    info!(
        name = report.report_metadata.name.as_deref().unwrap_or(""),
        groups = report.fact_map.len(),
        "loaded report"
    );

    let header = load_header_spec(&config.header)?;
    info!(
        labels = header.labels.len(),
        encoding = %header.encoding,
        "loaded header specification"
    );

    let conversion = convert(&report, header.labels, config.cell_value)?;
    if !conversion.extract.skipped.is_empty() {
        warn!(
            count = conversion.extract.skipped.len(),
            "dropped malformed rows"
        );
    }

    write_csv(
        &config.output,
        &conversion.header,
        &conversion.extract.rows,
        config.delimiter,
    )?;
    info!(output = %config.output.display(), "wrote output");

    Ok(RunSummary {
        output: config.output.clone(),
        rows_written: conversion.extract.rows.len(),
        skipped_rows: conversion.extract.skipped.len(),
        groups_without_rows: conversion.extract.groups_without_rows,
        header_encoding: header.encoding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PipelineError, ResolveError};
    use crate::parser::parse_report;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const REPORT: &str = r#"{
        "reportMetadata": { "detailColumns": ["c1", "c2"] },
        "reportExtendedMetadata": {
            "detailColumnInfo": { "c1": { "label": "Name" }, "c2": { "label": "Amount" } }
        },
        "factMap": {
            "T!T": { "rows": [ { "dataCells": [ { "label": "Alice" }, { "label": "100" } ] } ] }
        }
    }"#;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn setup(dir: &Path, report: &str, header: &str) -> RunConfig {
        let report_path = dir.join("report.json");
        let header_path = dir.join("output_header.csv");
        fs::write(&report_path, report).unwrap();
        fs::write(&header_path, header).unwrap();
        RunConfig::from_positionals(&[report_path, header_path, dir.join("output.csv")]).unwrap()
    }

    #[test]
    fn test_end_to_end() {
        let dir = tempdir().unwrap();
        let config = setup(dir.path(), REPORT, "\u{feff}Amount,Name\r\n");

        let summary = run(&config).unwrap();
        assert_eq!(summary.rows_written, 1);
        assert_eq!(summary.skipped_rows, 0);
        assert_eq!(summary.groups_without_rows, 0);
        assert_eq!(summary.header_encoding, "UTF-8");

        let bytes = fs::read(&config.output).unwrap();
        assert_eq!(bytes, b"\xEF\xBB\xBFAmount,Name\r\n100,Alice\r\n");
    }

    #[test]
    fn test_missing_label_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = setup(dir.path(), REPORT, "Amount,Ghost Column\n");

        let err = run(&config).unwrap_err();
        match err {
            PipelineError::Resolve(ResolveError::MissingColumn { label, available }) => {
                assert_eq!(label, "Ghost Column");
                assert_eq!(available, vec!["Name", "Amount"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!config.output.exists());
    }

    #[test]
    fn test_empty_report_writes_header_only() {
        let dir = tempdir().unwrap();
        let report = r#"{
            "reportMetadata": { "detailColumns": ["c1"] },
            "reportExtendedMetadata": { "detailColumnInfo": { "c1": { "label": "Name" } } },
            "factMap": { "T!T": { "aggregates": [] } }
        }"#;
        let config = setup(dir.path(), report, "Name\n");

        let summary = run(&config).unwrap();
        assert_eq!(summary.rows_written, 0);
        assert_eq!(summary.groups_without_rows, 1);
        assert_eq!(fs::read(&config.output).unwrap(), b"\xEF\xBB\xBFName\r\n");
    }

    #[test]
    fn test_missing_report_file() {
        let dir = tempdir().unwrap();
        let config = RunConfig::from_positionals(&[dir.path().join("absent.json")]).unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, PipelineError::Report(_)));
    }

    #[test]
    fn test_convert_order_and_padding() {
        let report = parse_report(
            r#"{
                "reportMetadata": { "detailColumns": ["a", "b", "c"] },
                "reportExtendedMetadata": { "detailColumnInfo": {
                    "a": { "label": "Owner" }, "b": { "label": "Stage" }, "c": { "label": "Amount" }
                } },
                "factMap": {
                    "0!T": { "rows": [
                        { "dataCells": [ { "label": "Kim" }, { "label": "Won" }, { "label": "5" } ] },
                        { "dataCells": [ { "label": "Lee" } ] },
                        42
                    ] }
                }
            }"#,
        )
        .unwrap();

        let conversion = convert(&report, labels(&["Amount", "Owner"]), CellValuePolicy::Label).unwrap();
        assert_eq!(conversion.targets, vec![2, 0]);
        assert_eq!(
            conversion.extract.rows,
            vec![
                vec![Some("5".to_string()), Some("Kim".to_string())],
                vec![None, Some("Lee".to_string())],
            ]
        );
        assert_eq!(conversion.extract.skipped.len(), 1);
    }
}
