//! Run configuration.
//!
//! Paths come from up to three positional arguments, filled in order
//! (report, header specification, output). Missing ones fall back to the
//! defaults below, relative to the working directory.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::transform::extractor::CellValuePolicy;
use crate::writer::DEFAULT_DELIMITER;

/// Report export read when no path is given.
pub const DEFAULT_REPORT: &str = "report.json";

/// Header specification read when no path is given.
pub const DEFAULT_HEADER: &str = "output_header.csv";

/// Output file written when no path is given.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Most positional arguments accepted.
pub const MAX_POSITIONALS: usize = 3;

/// Everything one conversion run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub report: PathBuf,
    pub header: PathBuf,
    pub output: PathBuf,
    /// Output field delimiter.
    pub delimiter: u8,
    pub cell_value: CellValuePolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            report: PathBuf::from(DEFAULT_REPORT),
            header: PathBuf::from(DEFAULT_HEADER),
            output: PathBuf::from(DEFAULT_OUTPUT),
            delimiter: DEFAULT_DELIMITER,
            cell_value: CellValuePolicy::default(),
        }
    }
}

impl RunConfig {
    /// Resolve paths from positional arguments by count.
    pub fn from_positionals<P: AsRef<Path>>(args: &[P]) -> ConfigResult<Self> {
        if args.len() > MAX_POSITIONALS {
            return Err(ConfigError::TooManyArguments(args.len()));
        }

        let mut config = Self::default();
        let slots = [&mut config.report, &mut config.header, &mut config.output];
        for (slot, arg) in slots.into_iter().zip(args) {
            *slot = arg.as_ref().to_path_buf();
        }

        Ok(config)
    }

    /// Set the output delimiter. Only single-byte ASCII delimiters are valid.
    pub fn with_delimiter(mut self, delimiter: char) -> ConfigResult<Self> {
        if !delimiter.is_ascii() {
            return Err(ConfigError::InvalidDelimiter(delimiter));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    pub fn with_cell_value(mut self, policy: CellValuePolicy) -> Self {
        self.cell_value = policy;
        self
    }
}
