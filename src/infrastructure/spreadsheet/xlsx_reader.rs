use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

use super::ColumnIndex;
use crate::domain::company::CompanyRecord;
use crate::domain::error::{AppError, Result};

/// Reads the first worksheet of an Excel workbook. The first row is the header.
#[derive(Default)]
pub struct XlsxReader;

impl XlsxReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &Path) -> Result<Vec<CompanyRecord>> {
        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
            AppError::IoError(format!("Failed to open Excel file {}: {}", path.display(), e))
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::ParseError("No worksheet found".to_string()))?
            .map_err(|e| AppError::ParseError(format!("Failed to read Excel range: {}", e)))?;

        self.read_range(&range)
    }

    pub fn read_range(&self, range: &Range<Data>) -> Result<Vec<CompanyRecord>> {
        let mut rows = range.rows();

        let headers: Vec<String> = rows
            .next()
            .ok_or_else(|| AppError::ParseError("Worksheet is empty".to_string()))?
            .iter()
            .map(render_cell)
            .collect();
        let columns = ColumnIndex::from_headers(&headers)?;

        let records = rows
            .map(|row| {
                let cells: Vec<String> = row.iter().map(render_cell).collect();
                columns.record(&cells)
            })
            .collect();

        Ok(records)
    }
}

/// Render a cell the way it reads in the sheet: integral numbers without a
/// fractional part, empty cells as "".
pub fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => render_number(*value),
        Data::DateTime(value) => render_number(value.as_f64()),
        other => other.to_string(),
    }
}

fn render_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_cell() {
        assert_eq!(render_cell(&Data::Empty), "");
        assert_eq!(render_cell(&Data::String("51-200".to_string())), "51-200");
        assert_eq!(render_cell(&Data::Float(45931.0)), "45931");
        assert_eq!(render_cell(&Data::Float(1.5)), "1.5");
        assert_eq!(render_cell(&Data::Int(12)), "12");
        assert_eq!(render_cell(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_read_range() {
        let mut range: Range<Data> = Range::new((0, 0), (3, 2));
        let cells = [
            ["Regiao-estado", "industry", "size"],
            ["Lisbon", "IT", "11-50"],
            ["", "HR", ""],
        ];
        for (r, row) in cells.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    range.set_value((r as u32, c as u32), Data::String(value.to_string()));
                }
            }
        }
        range.set_value((3, 0), Data::String("Porto".to_string()));
        range.set_value((3, 1), Data::String("Construction".to_string()));
        range.set_value((3, 2), Data::Float(45931.0));

        let records = XlsxReader::new().read_range(&range).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], CompanyRecord::new(Some("Lisbon"), "IT", "11-50"));
        assert_eq!(records[1].region_raw, None);
        assert_eq!(records[1].size_raw, "");
        assert_eq!(records[2].size_raw, "45931");
    }

    #[test]
    fn test_missing_file() {
        let err = XlsxReader::new()
            .read_file(Path::new("does-not-exist.xlsx"))
            .unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
