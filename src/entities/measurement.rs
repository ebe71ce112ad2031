//! CMM measurement row parsed from an uploaded inspection file
//!
//! All fields are carried as strings, exactly as the vendor format does -
//! nominal/measured/deviation are not interpreted numerically.

use serde::{Deserialize, Serialize};

/// One measured characteristic from a CMM report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CmmMeasurement {
    pub characteristic: String,
    pub nominal: String,
    pub measured: String,
    pub deviation: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header_names() {
        let m = CmmMeasurement {
            characteristic: "Bore dia".to_string(),
            nominal: "25.00".to_string(),
            measured: "25.02".to_string(),
            deviation: "0.02".to_string(),
            status: "OK".to_string(),
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"Characteristic\""));
        assert!(json.contains("\"Nominal\""));
        assert!(json.contains("\"Status\""));
    }
}
