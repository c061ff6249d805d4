//! Tokenizing feed files into header + data rows.
//!
//! Feed files are comma-delimited with a free-form preamble. The header row
//! is the first row whose first field starts with `#property`; that field
//! stands in for the service-number column and the remaining fields name the
//! other columns. Data rows are the rows after the header whose first field
//! is a non-negative integer (the service sequence number). Everything else
//! (further metadata rows, blank lines) is skipped.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::error::FeedError;

/// Marker that opens the header row.
pub const HEADER_MARKER: &str = "#property";

/// A tokenized feed: column names plus the data rows beneath them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTable {
    /// Column names following the header marker, in file order.
    pub columns: Vec<String>,
    /// Data rows, in file order.
    pub rows: Vec<FeedRow>,
}

/// One data row, without its leading sequence number.
///
/// `values` is aligned with [`FeedTable::columns`]: short rows are padded
/// with empty strings, long rows truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    pub values: Vec<String>,
}

impl FeedTable {
    /// Iterate rows as field-name → value records.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|row| Record {
            columns: &self.columns,
            row,
        })
    }
}

/// A data row viewed through the header.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    row: &'a FeedRow,
}

impl<'a> Record<'a> {
    /// Value of the first column with this name, if the column exists.
    pub fn get(self, name: &str) -> Option<&'a str> {
        let idx = self.columns.iter().position(|c| c == name)?;
        self.value_at(idx)
    }

    /// Value at a column position.
    pub fn value_at(self, idx: usize) -> Option<&'a str> {
        self.row.values.get(idx).map(String::as_str)
    }

    /// `(column name, value)` pairs in header order.
    pub fn fields(self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.row.values.iter().map(String::as_str))
    }
}

/// Trimmed cell value, or empty when the column is absent.
pub fn cell_or_empty(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Whether a leading field is a service sequence number: a non-negative
/// integer of any length.
pub fn is_sequence_number(field: &str) -> bool {
    let field = field.trim();
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Tokenize a feed from any reader.
///
/// `path` is only used for error reporting. Input that is not UTF-8 is
/// rejected as a whole.
pub fn read_table<R: Read>(reader: R, path: &Path) -> Result<FeedTable, FeedError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut columns: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let more = rdr.read_record(&mut record).map_err(|source| FeedError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if !more {
            break;
        }

        let fields: Vec<String> = record
            .iter()
            .map(|f| f.trim().to_string())
            .collect();
        let Some(first) = fields.first() else {
            continue;
        };

        match columns.as_ref().map(Vec::len) {
            None => {
                if first.trim_start_matches('\u{feff}').starts_with(HEADER_MARKER) {
                    columns = Some(fields[1..].to_vec());
                }
            }
            Some(width) => {
                if !is_sequence_number(first) {
                    continue;
                }
                let mut values = fields[1..].to_vec();
                values.resize(width, String::new());
                rows.push(FeedRow { values });
            }
        }
    }

    let columns = columns.ok_or_else(|| FeedError::MalformedHeader {
        path: path.to_path_buf(),
    })?;

    Ok(FeedTable { columns, rows })
}
