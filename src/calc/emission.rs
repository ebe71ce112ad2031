//! CO2-equivalent emission calculator
//!
//! A pure mapping from physical quantities to emission contributions via a
//! fixed per-category factor table. The source variants carried several
//! mutually inconsistent tables; the one below is the canonical choice for
//! this implementation (see DESIGN.md) and lives only here.

use serde::Serialize;
use thiserror::Error;

/// Emission input category, each with a fixed unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionCategory {
    Electricity,
    Heating,
    VehicleKm,
    FlightHours,
    WasteKg,
    DieselLiters,
    SteelKg,
    AluminumKg,
    TransportTkm,
}

impl EmissionCategory {
    /// Emission factor in kg CO2e per unit
    pub const fn factor(&self) -> f64 {
        match self {
            EmissionCategory::Electricity => 0.65,
            EmissionCategory::Heating => 0.20,
            EmissionCategory::VehicleKm => 0.17,
            EmissionCategory::FlightHours => 250.0,
            EmissionCategory::WasteKg => 0.45,
            EmissionCategory::DieselLiters => 2.68,
            EmissionCategory::SteelKg => 1.85,
            EmissionCategory::AluminumKg => 11.5,
            EmissionCategory::TransportTkm => 0.062,
        }
    }

    /// The physical unit the quantity is measured in
    pub fn unit(&self) -> &'static str {
        match self {
            EmissionCategory::Electricity => "kWh",
            EmissionCategory::Heating => "kWh",
            EmissionCategory::VehicleKm => "km",
            EmissionCategory::FlightHours => "h",
            EmissionCategory::WasteKg => "kg",
            EmissionCategory::DieselLiters => "l",
            EmissionCategory::SteelKg => "kg",
            EmissionCategory::AluminumKg => "kg",
            EmissionCategory::TransportTkm => "tkm",
        }
    }

    /// Stable snake_case name used in output and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionCategory::Electricity => "electricity",
            EmissionCategory::Heating => "heating",
            EmissionCategory::VehicleKm => "vehicle_km",
            EmissionCategory::FlightHours => "flight_hours",
            EmissionCategory::WasteKg => "waste_kg",
            EmissionCategory::DieselLiters => "diesel_liters",
            EmissionCategory::SteelKg => "steel_kg",
            EmissionCategory::AluminumKg => "aluminum_kg",
            EmissionCategory::TransportTkm => "transport_tkm",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [EmissionCategory] {
        &[
            EmissionCategory::Electricity,
            EmissionCategory::Heating,
            EmissionCategory::VehicleKm,
            EmissionCategory::FlightHours,
            EmissionCategory::WasteKg,
            EmissionCategory::DieselLiters,
            EmissionCategory::SteelKg,
            EmissionCategory::AluminumKg,
            EmissionCategory::TransportTkm,
        ]
    }
}

impl std::fmt::Display for EmissionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One computed contribution line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionLine {
    pub category: EmissionCategory,
    pub quantity: f64,
    pub factor: f64,
    pub co2e_kg: f64,
}

/// The computed emission breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionReport {
    pub lines: Vec<EmissionLine>,
    pub total_kg: f64,
}

/// Compute per-category contributions and their sum.
///
/// Categories appear in the report in input order; a negative quantity in
/// any position rejects the whole input with no partial result.
pub fn compute(
    quantities: &[(EmissionCategory, f64)],
) -> Result<EmissionReport, EmissionError> {
    for (category, quantity) in quantities {
        if *quantity < 0.0 {
            return Err(EmissionError::InvalidQuantity {
                category: *category,
                quantity: *quantity,
            });
        }
    }

    let lines: Vec<EmissionLine> = quantities
        .iter()
        .map(|(category, quantity)| EmissionLine {
            category: *category,
            quantity: *quantity,
            factor: category.factor(),
            co2e_kg: quantity * category.factor(),
        })
        .collect();

    let total_kg = lines.iter().map(|l| l.co2e_kg).sum();

    Ok(EmissionReport { lines, total_kg })
}

/// Errors that can occur when computing emissions
#[derive(Debug, Error)]
pub enum EmissionError {
    #[error("negative quantity {quantity} for category '{category}'")]
    InvalidQuantity {
        category: EmissionCategory,
        quantity: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category_exact_product() {
        let report = compute(&[
            (EmissionCategory::Electricity, 100.0),
            (EmissionCategory::SteelKg, 0.0),
            (EmissionCategory::DieselLiters, 0.0),
            (EmissionCategory::TransportTkm, 0.0),
        ])
        .unwrap();

        assert_eq!(report.total_kg, 100.0 * EmissionCategory::Electricity.factor());
        assert_eq!(report.total_kg, 65.0);
        assert_eq!(report.lines[0].co2e_kg, 65.0);
        assert!(report.lines[1..].iter().all(|l| l.co2e_kg == 0.0));
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let report = compute(&[
            (EmissionCategory::Electricity, 10.0),
            (EmissionCategory::DieselLiters, 5.0),
            (EmissionCategory::FlightHours, 2.0),
        ])
        .unwrap();

        let expected: f64 = report.lines.iter().map(|l| l.co2e_kg).sum();
        assert_eq!(report.total_kg, expected);
        assert_eq!(report.lines.len(), 3);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let err = compute(&[
            (EmissionCategory::Electricity, 100.0),
            (EmissionCategory::WasteKg, -1.0),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            EmissionError::InvalidQuantity {
                category: EmissionCategory::WasteKg,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_input_is_zero() {
        let report = compute(&[]).unwrap();
        assert!(report.lines.is_empty());
        assert_eq!(report.total_kg, 0.0);
    }

    #[test]
    fn test_factor_table_complete_and_positive() {
        for category in EmissionCategory::all() {
            assert!(category.factor() > 0.0, "{} has no factor", category);
            assert!(!category.unit().is_empty());
        }
    }
}
