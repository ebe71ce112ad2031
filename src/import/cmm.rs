//! CMM inspection file parsing
//!
//! Two input shapes are accepted, dispatched on file extension:
//!
//! - `.csv` - generic tabular export with a
//!   `Characteristic,Nominal,Measured,Deviation,Status` header
//! - `.dfq` - the simplified vendor text subset: only lines prefixed `CC`
//!   carry measurements, comma-separated, fields mapped positionally
//!   (1 characteristic, 2 nominal, 3 measured, 4 deviation, 7 status)
//!
//! A file that yields no measurements is a parse failure - there is no
//! partial result.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::entities::measurement::CmmMeasurement;

/// Parse an uploaded inspection file by extension
pub fn parse(path: &Path) -> Result<Vec<CmmMeasurement>, CmmParseError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => parse_csv(path),
        "dfq" => parse_dfq(&fs::read_to_string(path)?),
        _ => Err(CmmParseError::UnsupportedFormat(ext)),
    }
}

fn parse_csv(path: &Path) -> Result<Vec<CmmMeasurement>, CmmParseError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let rows: Vec<CmmMeasurement> = rdr.deserialize().collect::<Result<_, _>>()?;
    if rows.is_empty() {
        return Err(CmmParseError::NoMeasurements);
    }
    Ok(rows)
}

/// Parse the `CC`-line subset of the vendor text format.
///
/// Lines with fewer than six comma-separated fields are skipped; a missing
/// status field is recorded as `?`.
pub fn parse_dfq(text: &str) -> Result<Vec<CmmMeasurement>, CmmParseError> {
    let mut rows = Vec::new();

    for line in text.lines() {
        if !line.starts_with("CC") {
            continue;
        }
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 6 {
            continue;
        }
        rows.push(CmmMeasurement {
            characteristic: parts[1].to_string(),
            nominal: parts[2].to_string(),
            measured: parts[3].to_string(),
            deviation: parts[4].to_string(),
            status: parts.get(7).unwrap_or(&"?").to_string(),
        });
    }

    if rows.is_empty() {
        return Err(CmmParseError::NoMeasurements);
    }
    Ok(rows)
}

/// Errors that can occur when parsing an inspection file
#[derive(Debug, Error)]
pub enum CmmParseError {
    #[error("unsupported measurement file format: '{0}' (use .csv or .dfq)")]
    UnsupportedFormat(String),

    #[error("no measurements found - check the file format")]
    NoMeasurements,

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const DFQ_SAMPLE: &str = "\
K0001 header noise\n\
CC,Bore dia,25.00,25.02,0.02,tol,ok,OK\n\
CC,Slot width,10.00,9.97,-0.03,tol,nok,NOK\n\
CC,short,line\n\
CC,Pin height,5.00,5.01,0.01,tol\n\
K9999 trailer\n";

    #[test]
    fn test_dfq_positional_mapping() {
        let rows = parse_dfq(DFQ_SAMPLE).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].characteristic, "Bore dia");
        assert_eq!(rows[0].nominal, "25.00");
        assert_eq!(rows[0].measured, "25.02");
        assert_eq!(rows[0].deviation, "0.02");
        assert_eq!(rows[0].status, "OK");

        assert_eq!(rows[1].status, "NOK");
    }

    #[test]
    fn test_dfq_missing_status_is_question_mark() {
        let rows = parse_dfq(DFQ_SAMPLE).unwrap();
        // Third row has only six fields, so no status column
        assert_eq!(rows[2].characteristic, "Pin height");
        assert_eq!(rows[2].status, "?");
    }

    #[test]
    fn test_dfq_without_cc_lines_fails() {
        let err = parse_dfq("K0001 nothing here\nK0002 still nothing\n").unwrap_err();
        assert!(matches!(err, CmmParseError::NoMeasurements));
    }

    #[test]
    fn test_csv_parse() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("report.csv");
        std::fs::write(
            &path,
            "Characteristic,Nominal,Measured,Deviation,Status\n\
             Bore dia,25.00,25.02,0.02,OK\n\
             Slot width,10.00,9.97,-0.03,NOK\n",
        )
        .unwrap();

        let rows = parse(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].characteristic, "Bore dia");
        assert_eq!(rows[1].status, "NOK");
    }

    #[test]
    fn test_empty_csv_fails() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("report.csv");
        std::fs::write(&path, "Characteristic,Nominal,Measured,Deviation,Status\n").unwrap();

        let err = parse(&path).unwrap_err();
        assert!(matches!(err, CmmParseError::NoMeasurements));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = parse(&PathBuf::from("report.xlsx")).unwrap_err();
        assert!(matches!(err, CmmParseError::UnsupportedFormat(_)));
    }
}
