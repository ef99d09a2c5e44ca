// ============================================================
// SPREADSHEET LOADING
// ============================================================
// Read company rows from .xlsx or .csv into CompanyRecords

mod csv_reader;
mod xlsx_reader;

pub use csv_reader::CsvReader;
pub use xlsx_reader::XlsxReader;

use std::path::Path;

use crate::domain::company::CompanyRecord;
use crate::domain::error::{AppError, Result};

pub const REGION_COLUMN: &str = "Regiao-estado";
pub const INDUSTRY_COLUMN: &str = "industry";
pub const SIZE_COLUMN: &str = "size";

/// Load every company row from `path`, picking the reader by extension.
pub fn load_records(path: &Path) -> Result<Vec<CompanyRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx") | Some("xlsm") => XlsxReader::new().read_file(path),
        Some("csv") | Some("txt") => CsvReader::read_file_auto_detect(path),
        _ => Err(AppError::ValidationError(format!(
            "Unsupported data file (expected .xlsx or .csv): {}",
            path.display()
        ))),
    }
}

/// Positions of the three columns the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    region: usize,
    industry: usize,
    size: usize,
}

impl ColumnIndex {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().trim() == name)
                .ok_or_else(|| AppError::ParseError(format!("Missing column '{}'", name)))
        };

        Ok(Self {
            region: find(REGION_COLUMN)?,
            industry: find(INDUSTRY_COLUMN)?,
            size: find(SIZE_COLUMN)?,
        })
    }

    /// Build a record from a row of rendered cells. Short rows read as empty.
    pub fn record<S: AsRef<str>>(&self, row: &[S]) -> CompanyRecord {
        let cell = |idx: usize| row.get(idx).map(|c| c.as_ref()).unwrap_or("");
        let region = cell(self.region);

        CompanyRecord {
            region_raw: if region.is_empty() {
                None
            } else {
                Some(region.to_string())
            },
            industry: cell(self.industry).to_string(),
            size_raw: cell(self.size).to_string(),
        }
    }
}
