//! Series ohmic resistance of a cell.
//!
//! Conductivities are in S/cm, so lengths and areas are converted to cm and
//! cm² before use. The nickel and KOH correlations are fit in kelvin; the
//! membrane correlation is fit in degrees Celsius.

use uom::si::{
    area::{square_centimeter, square_meter},
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricalResistance, ThermodynamicTemperature},
    length::centimeter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constraint, NonZero, UnitIntervalUpperOpen};

use super::{
    Conductor, DomainError, ElectrolyzerConfig,
    electrolyte::{bubble_coverage, molarity},
    input::kelvins,
};

/// Area-specific resistance scale of the 0.5 mm membrane correlation, Ω·m².
const MEMBRANE_RESISTANCE_SCALE: f64 = 1e-8;

/// Resistance contributions of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhmicResistance {
    pub anode: ElectricalResistance,
    pub cathode: ElectricalResistance,
    pub electrolyte: ElectricalResistance,
    pub membrane: ElectricalResistance,
}

impl OhmicResistance {
    /// Total series resistance.
    #[must_use]
    pub fn total(&self) -> ElectricalResistance {
        self.anode + self.cathode + self.electrolyte + self.membrane
    }
}

/// Electrical conductivity of nickel, S/cm.
fn nickel_conductivity(t: f64) -> f64 {
    6e6 - 279_650.0 * t + 532.0 * t.powi(2) - 0.38057 * t.powi(3)
}

/// Ionic conductivity of KOH solution at molarity `m`, S/cm.
fn koh_conductivity(t: f64, m: f64) -> f64 {
    -2.04 * m - 0.0028 * m.powi(2) + 0.005332 * m * t + 207.2 * m / t + 0.001043 * m.powi(3)
        - 0.000_000_3 * m.powi(2) * t.powi(2)
}

/// Membrane resistance times area, Ω·m², with `t` in °C.
fn membrane_area_resistance(t_celsius: f64) -> f64 {
    (0.060 + 80.0 * (t_celsius / 50.0).exp()) * MEMBRANE_RESISTANCE_SCALE
}

fn non_zero(
    conductivity: f64,
    conductor: Conductor,
    temperature: ThermodynamicTemperature,
) -> Result<f64, DomainError> {
    NonZero::check(&conductivity).map_err(|_| DomainError::ZeroConductivity {
        conductor,
        temperature,
    })?;
    Ok(conductivity)
}

/// Computes the resistance contributions of one cell.
///
/// - Electrodes: `R = L / (ω_Ni·S)`.
/// - Electrolyte: `R_free = (d_am/S_a + d_cm/S_c) / ω_KOH`, scaled by the
///   bubble void factor `1/(1 − e)^1.5` with `e = (2/3)·θ_a`.
/// - Membrane: `(0.060 + 80·exp(t/50))·1e−8 / S_m`, `t` in °C.
///
/// # Errors
///
/// Returns a [`DomainError`] if the current or temperature is invalid, a
/// conductivity is zero, or the void fraction reaches one.
pub fn resistance_breakdown(
    config: &ElectrolyzerConfig,
    current: ElectricCurrent,
    temperature: ThermodynamicTemperature,
) -> Result<OhmicResistance, DomainError> {
    let t = kelvins(temperature)?;
    let geometry = config.geometry();

    let s_a = geometry.anode_area.get::<square_centimeter>();
    let s_c = geometry.cathode_area.get::<square_centimeter>();

    let omega_ni = non_zero(nickel_conductivity(t), Conductor::Nickel, temperature)?;
    let anode = geometry.anode_height.get::<centimeter>() / omega_ni / s_a;
    let cathode = geometry.cathode_height.get::<centimeter>() / omega_ni / s_c;

    let m = molarity(config, temperature)?;
    let omega_koh = non_zero(koh_conductivity(t, m), Conductor::Electrolyte, temperature)?;
    let free = (geometry.anode_membrane_gap.get::<centimeter>() / s_a
        + geometry.cathode_membrane_gap.get::<centimeter>() / s_c)
        / omega_koh;

    let void_fraction = 2.0 / 3.0 * bubble_coverage(current, geometry.anode_area)?;
    UnitIntervalUpperOpen::check(&void_fraction)
        .map_err(|_| DomainError::VoidFraction { void_fraction })?;
    let electrolyte = free + free * (1.0 / (1.0 - void_fraction).powf(1.5) - 1.0);

    let membrane = membrane_area_resistance(temperature.get::<degree_celsius>())
        / geometry.membrane_area.get::<square_meter>();

    Ok(OhmicResistance {
        anode: ElectricalResistance::new::<ohm>(anode),
        cathode: ElectricalResistance::new::<ohm>(cathode),
        electrolyte: ElectricalResistance::new::<ohm>(electrolyte),
        membrane: ElectricalResistance::new::<ohm>(membrane),
    })
}

/// Computes the total series resistance `r = R_a + R_c + R_ele + R_mem` of one cell.
///
/// # Errors
///
/// Same conditions as [`resistance_breakdown`].
pub fn ohmic_resistance(
    config: &ElectrolyzerConfig,
    current: ElectricCurrent,
    temperature: ThermodynamicTemperature,
) -> Result<ElectricalResistance, DomainError> {
    resistance_breakdown(config, current, temperature).map(|r| r.total())
}
