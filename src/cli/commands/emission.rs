//! `qadesk emission` command - CO2e accounting
//!
//! `calc` maps the provided quantities through the fixed factor table;
//! `factors` prints the table itself.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::calc::emission::{compute, EmissionCategory};
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum EmissionCommands {
    /// Compute CO2e contributions for the given quantities
    Calc(CalcArgs),

    /// Print the emission factor table
    Factors,
}

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// Electricity consumption in kWh
    #[arg(long, value_name = "KWH", allow_negative_numbers = true)]
    pub electricity: Option<f64>,

    /// Heating energy in kWh
    #[arg(long, value_name = "KWH", allow_negative_numbers = true)]
    pub heating: Option<f64>,

    /// Company vehicle distance in km
    #[arg(long, value_name = "KM", allow_negative_numbers = true)]
    pub vehicle_km: Option<f64>,

    /// Flight time in hours
    #[arg(long, value_name = "H", allow_negative_numbers = true)]
    pub flight_hours: Option<f64>,

    /// Waste mass in kg
    #[arg(long, value_name = "KG", allow_negative_numbers = true)]
    pub waste_kg: Option<f64>,

    /// Diesel consumption in liters
    #[arg(long, value_name = "L", allow_negative_numbers = true)]
    pub diesel_liters: Option<f64>,

    /// Steel input in kg
    #[arg(long, value_name = "KG", allow_negative_numbers = true)]
    pub steel_kg: Option<f64>,

    /// Aluminum input in kg
    #[arg(long, value_name = "KG", allow_negative_numbers = true)]
    pub aluminum_kg: Option<f64>,

    /// Freight transport in tonne-kilometers
    #[arg(long, value_name = "TKM", allow_negative_numbers = true)]
    pub transport_tkm: Option<f64>,
}

impl CalcArgs {
    fn quantities(&self) -> Vec<(EmissionCategory, f64)> {
        let pairs = [
            (EmissionCategory::Electricity, self.electricity),
            (EmissionCategory::Heating, self.heating),
            (EmissionCategory::VehicleKm, self.vehicle_km),
            (EmissionCategory::FlightHours, self.flight_hours),
            (EmissionCategory::WasteKg, self.waste_kg),
            (EmissionCategory::DieselLiters, self.diesel_liters),
            (EmissionCategory::SteelKg, self.steel_kg),
            (EmissionCategory::AluminumKg, self.aluminum_kg),
            (EmissionCategory::TransportTkm, self.transport_tkm),
        ];
        pairs
            .into_iter()
            .filter_map(|(category, quantity)| quantity.map(|q| (category, q)))
            .collect()
    }
}

/// Run an emission subcommand
pub fn run(cmd: EmissionCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        EmissionCommands::Calc(args) => run_calc(args, global),
        EmissionCommands::Factors => run_factors(global),
    }
}

fn run_calc(args: CalcArgs, global: &GlobalOpts) -> Result<()> {
    let quantities = args.quantities();
    if quantities.is_empty() {
        return Err(miette::miette!(
            "provide at least one quantity, e.g. --electricity 100"
        ));
    }

    let report = compute(&quantities).map_err(|e| miette::miette!("{}", e))?;

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("category,unit,quantity,factor,co2e_kg");
            for line in &report.lines {
                println!(
                    "{},{},{},{},{}",
                    line.category,
                    line.category.unit(),
                    line.quantity,
                    line.factor,
                    line.co2e_kg
                );
            }
            println!("total,,,,{}", report.total_kg);
        }
        OutputFormat::Md => {
            println!("| Category | Quantity | Factor | kg CO2e |");
            println!("|---|---|---|---|");
            for line in &report.lines {
                println!(
                    "| {} | {} {} | {} | {:.2} |",
                    line.category,
                    line.quantity,
                    line.category.unit(),
                    line.factor,
                    line.co2e_kg
                );
            }
            println!("| **total** | | | **{:.2}** |", report.total_kg);
        }
        _ => {
            println!(
                "{:<15} {:>12} {:>8} {:>12}",
                style("CATEGORY").bold(),
                style("QUANTITY").bold(),
                style("FACTOR").bold(),
                style("KG CO2E").bold()
            );
            println!("{}", "-".repeat(50));
            for line in &report.lines {
                println!(
                    "{:<15} {:>8} {:>3} {:>8} {:>12.2}",
                    line.category,
                    line.quantity,
                    line.category.unit(),
                    line.factor,
                    line.co2e_kg
                );
            }
            println!("{}", "-".repeat(50));
            println!(
                "{:<15} {:>36}",
                style("total").bold(),
                style(format!("{:.2} kg CO2e", report.total_kg)).cyan().bold()
            );
        }
    }

    Ok(())
}

fn run_factors(global: &GlobalOpts) -> Result<()> {
    match global.format {
        OutputFormat::Json => {
            let entries: Vec<_> = EmissionCategory::all()
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "category": c,
                        "unit": c.unit(),
                        "factor_kg_per_unit": c.factor(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("category,unit,factor_kg_per_unit");
            for c in EmissionCategory::all() {
                println!("{},{},{}", c, c.unit(), c.factor());
            }
        }
        OutputFormat::Md => {
            println!("| Category | Unit | kg CO2e per unit |");
            println!("|---|---|---|");
            for c in EmissionCategory::all() {
                println!("| {} | {} | {} |", c, c.unit(), c.factor());
            }
        }
        _ => {
            println!(
                "{:<15} {:<5} {}",
                style("CATEGORY").bold(),
                style("UNIT").bold(),
                style("KG CO2E / UNIT").bold()
            );
            println!("{}", "-".repeat(38));
            for c in EmissionCategory::all() {
                println!("{:<15} {:<5} {}", c, c.unit(), c.factor());
            }
        }
    }

    Ok(())
}
