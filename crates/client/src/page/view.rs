//! Vehicle detail rows.

use vinlookup_domain::{FieldValue, VehicleRecord};

/// Placeholder for a missing or blank attribute.
pub const PLACEHOLDER: &str = "N/A";

/// One labeled line in the vehicle details section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Build the fixed, ordered vehicle detail rows.
pub fn vehicle_rows(vehicle: &VehicleRecord) -> Vec<DetailRow> {
    let fields: [(&'static str, &Option<FieldValue>); 10] = [
        ("Make", &vehicle.make),
        ("Model", &vehicle.model),
        ("Model Year", &vehicle.model_year),
        ("Body Class", &vehicle.body_class),
        ("Vehicle Type", &vehicle.vehicle_type),
        ("Engine Cylinders", &vehicle.engine_cylinders),
        ("Engine Displacement (L)", &vehicle.displacement_l),
        ("Fuel Type", &vehicle.fuel_type_primary),
        ("Drivetrain", &vehicle.drive_type),
        ("Transmission Style", &vehicle.transmission_style),
    ];

    let mut rows: Vec<DetailRow> = fields
        .into_iter()
        .map(|(label, value)| DetailRow {
            label,
            value: display_or_placeholder(value),
        })
        .collect();

    // The composite always contains separators, so it is never blank.
    rows.push(DetailRow {
        label: "Manufactured In",
        value: vehicle.manufactured_in(),
    });

    rows
}

fn display_or_placeholder(value: &Option<FieldValue>) -> String {
    match value {
        Some(v) if !v.is_blank() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
