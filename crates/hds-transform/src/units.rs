//! Unit conversions for lab values.

/// Approximate mg/dL per mmol/L for plasma glucose.
pub const GLUCOSE_MGDL_PER_MMOL: f64 = 18.0;

pub fn glucose_mmol_to_mgdl(value: f64) -> f64 {
    value * GLUCOSE_MGDL_PER_MMOL
}
