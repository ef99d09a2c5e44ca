// ============================================================
// CSV READER
// ============================================================
// Parse company CSV exports with encoding and delimiter detection

use csv::{ReaderBuilder, Trim};
use std::path::Path;

use super::ColumnIndex;
use crate::domain::company::CompanyRecord;
use crate::domain::error::{AppError, Result};

pub struct CsvReader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn read_file(&self, path: &Path) -> Result<Vec<CompanyRecord>> {
        let content = read_with_encoding_detection(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content whose header row names the company columns.
    /// Only headers are trimmed; cell values reach the normalizer verbatim,
    /// as they do from a workbook.
    pub fn parse_content(&self, content: &str) -> Result<Vec<CompanyRecord>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::Headers)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            let cells: Vec<&str> = row.iter().collect();
            records.push(columns.record(&cells));
        }

        Ok(records)
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        if sample_lines.is_empty() {
            return best_delimiter;
        }

        for &delimiter in &candidates {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }

    pub fn read_file_auto_detect(path: &Path) -> Result<Vec<CompanyRecord>> {
        let content = read_with_encoding_detection(path)?;
        let delimiter = Self::detect_delimiter(&content);
        Self::default().with_delimiter(delimiter).parse_content(&content)
    }
}

/// UTF-8 first, Windows-1252 otherwise (spreadsheet exports from Excel on
/// Portuguese locales).
fn read_with_encoding_detection(path: &Path) -> Result<String> {
    let buffer = std::fs::read(path)
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(decode(&buffer))
}

fn decode(buffer: &[u8]) -> String {
    let buffer = buffer.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(buffer);
    match std::str::from_utf8(buffer) {
        Ok(content) => content.to_string(),
        Err(_) => {
            let (content, _, _) = encoding_rs::WINDOWS_1252.decode(buffer);
            content.into_owned()
        }
    }
}
