//! CSV decoding into raw rows.
//!
//! Cells are typed by sniffing so the normalizer sees the same value
//! shapes the original XLSX decoder produced: empty cells become the
//! explicit `Null` sentinel, boolean and numeric literals become typed
//! scalars, everything else stays text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use jam_model::{RawRow, RawValue};
use jam_normalize::coerce::parse_numeric;

use crate::error::{IngestError, Result};

/// Read a CSV file into raw rows, using the first record as headers.
pub fn read_csv(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_from(file).map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read CSV from any reader (in-memory inputs in tests).
///
/// Records shorter than the header are padded with `Null`; flexible
/// length keeps ragged human-edited exports loadable.
pub fn read_csv_from<R: Read>(reader: R) -> std::result::Result<Vec<RawRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (index, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let cell = record.get(index).unwrap_or("");
            row.insert(header, sniff_value(cell));
        }
        rows.push(row);
    }
    tracing::debug!(rows = rows.len(), columns = headers.len(), "decoded CSV");
    Ok(rows)
}

/// Type a textual cell the way the spreadsheet decoder would.
fn sniff_value(cell: &str) -> RawValue {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return RawValue::Null;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return RawValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return RawValue::Bool(false);
    }
    match parse_numeric(trimmed) {
        Some(number) => RawValue::Number(number),
        None => RawValue::Text(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_typed_cells() {
        let input = "name,skillBadges,verified\nAda,5,true\nGrace,,\n";
        let rows = read_csv_from(input.as_bytes()).expect("parse csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].get("name"),
            Some(&RawValue::Text("Ada".to_string()))
        );
        assert_eq!(rows[0].get("skillBadges"), Some(&RawValue::Number(5.0)));
        assert_eq!(rows[0].get("verified"), Some(&RawValue::Bool(true)));
        // Empty cells are the Null sentinel, which reads as absent.
        assert!(rows[1].get("skillBadges").is_none());
    }

    #[test]
    fn short_records_read_as_null() {
        let input = "name,streak\nAda\n";
        let rows = read_csv_from(input.as_bytes()).expect("parse csv");
        assert!(rows[0].get("streak").is_none());
        assert!(rows[0].get("name").is_some());
    }

    #[test]
    fn headers_are_trimmed() {
        let input = " name , streak \nAda,3\n";
        let rows = read_csv_from(input.as_bytes()).expect("parse csv");
        assert!(rows[0].get("name").is_some());
        assert_eq!(rows[0].get("streak"), Some(&RawValue::Number(3.0)));
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let input = "name\n\"Lovelace, Ada\"\n";
        let rows = read_csv_from(input.as_bytes()).expect("parse csv");
        assert_eq!(
            rows[0].get("name"),
            Some(&RawValue::Text("Lovelace, Ada".to_string()))
        );
    }
}
