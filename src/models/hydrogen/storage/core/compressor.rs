//! Two-stage polytropic hydrogen compressor.

use uom::si::{
    f64::{Power, Pressure, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    power::watt,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    units::MolarFlowRate,
};

use super::{CompressorConfig, StorageError};

/// Below this `|(m − 1)/m|` the isothermal work expression is used.
const ISOTHERMAL_TOLERANCE: f64 = 1e-9;

/// Compressor state for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorOutput {
    pub outlet_pressure: Pressure,
    pub outlet_temperature: ThermodynamicTemperature,

    /// Polytropic exponent `m` of the compression path.
    ///
    /// `m = 1` is isothermal; `m` is infinite when the temperature ratio
    /// equals the pressure ratio.
    pub polytropic_exponent: f64,

    /// Shaft power required.
    pub power: Power,
}

fn check<C: Constraint<f64>>(value: f64, context: &'static str) -> Result<f64, StorageError> {
    C::check(&value).map_err(|_| StorageError::Domain { context, value })?;
    Ok(value)
}

/// Compresses a hydrogen flow from the electrolyzer outlet to the configured outlet state.
///
/// The polytropic exponent follows from the end states,
/// `(m − 1)/m = ln(T2/T1) / ln(P2/P1)`, and the work of two stages with equal
/// pressure ratios is
///
/// `W = 2·ṅ·m·R·T1 / ((m − 1)·η) · ((P2/P1)^((m−1)/(2m)) − 1)`
///
/// which tends to `ṅ·R·T1·ln(P2/P1)/η` as `m → 1`.
///
/// # Errors
///
/// Returns [`StorageError::Domain`] if the flow is negative, the inlet pressure
/// or temperature is not strictly positive, or the inlet pressure is not below
/// the outlet pressure.
pub fn compress(
    config: &CompressorConfig,
    flow: MolarFlowRate,
    inlet_pressure: Pressure,
    inlet_temperature: ThermodynamicTemperature,
) -> Result<CompressorOutput, StorageError> {
    let n_dot = check::<NonNegative>(flow.value, "compressor flow must be non-negative")?;
    let p1 = check::<StrictlyPositive>(
        inlet_pressure.get::<pascal>(),
        "compressor inlet pressure must be strictly positive",
    )?;
    let t1 = check::<StrictlyPositive>(
        inlet_temperature.get::<kelvin>(),
        "compressor inlet temperature must be strictly positive",
    )?;

    let p2 = config.outlet_pressure().get::<pascal>();
    let t2 = config.outlet_temperature().get::<kelvin>();
    if p1 >= p2 {
        return Err(StorageError::Domain {
            context: "compressor inlet pressure must be below outlet pressure",
            value: p1,
        });
    }

    let r = config.gas_constant().get::<joule_per_kelvin_mole>();
    let eta = config.efficiency();
    let ratio = p2 / p1;

    // k = (m − 1)/m
    let k = (t2 / t1).ln() / ratio.ln();
    let work = if k.abs() < ISOTHERMAL_TOLERANCE {
        n_dot * r * t1 * ratio.ln() / eta
    } else {
        2.0 * n_dot * r * t1 / (k * eta) * (k / 2.0 * ratio.ln()).exp_m1()
    };

    Ok(CompressorOutput {
        outlet_pressure: config.outlet_pressure(),
        outlet_temperature: config.outlet_temperature(),
        polytropic_exponent: 1.0 / (1.0 - k),
        power: Power::new::<watt>(work),
    })
}
