//! Reversible (thermodynamic) cell voltage.
//!
//! All correlations here are fit in kelvin and bar.

use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Pressure, ThermodynamicTemperature},
    pressure::bar,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{DomainError, ElectrolyzerConfig, electrolyte::molarity, input::kelvins};

/// Vapor pressures over the electrolyte and over pure water, in bar.
#[derive(Debug, Clone, Copy)]
struct VaporPressures {
    electrolyte: f64,
    pure_water: f64,
}

impl VaporPressures {
    /// Both pressures are strictly positive; the fits underflow to zero near absolute zero.
    fn at(
        config: &ElectrolyzerConfig,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, DomainError> {
        let t = kelvins(temperature)?;
        let m = molarity(config, temperature)?;

        let electrolyte = t.powf(-3.498)
            * (37.93 - 6426.32 / t).exp()
            * (0.016214 - 0.13802 * m + 0.19330 * m.sqrt()).exp();
        let pure_water = t.powf(-3.4159) * (37.043 - 6275.7 / t).exp();

        for (quantity, value) in [
            ("vapor pressure", electrolyte),
            ("pure water vapor pressure", pure_water),
        ] {
            StrictlyPositive::check(&value).map_err(|_| DomainError::Electrolyte {
                quantity,
                value,
                temperature,
            })?;
        }

        Ok(Self {
            electrolyte,
            pure_water,
        })
    }
}

/// Standard reversible potential as a function of temperature, in volts.
fn standard_potential(t: f64) -> f64 {
    1.50342 - 9.956e-4 * t + 2.5e-7 * t * t
}

/// Validated inputs shared by both reversible potentials.
pub(super) struct Nernst {
    t: f64,
    e0: f64,
    /// `P − pw`, bar, strictly positive.
    excess: f64,
    /// `(P − pw)^1.5 · ppw / pw`.
    activity_ratio: f64,
    /// `R·T / (n·F)`, volts.
    thermal_voltage: f64,
}

impl Nernst {
    pub(super) fn new(
        config: &ElectrolyzerConfig,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, DomainError> {
        let t = kelvins(temperature)?;
        let vapor = VaporPressures::at(config, temperature)?;
        let vapor_pressure = Pressure::new::<bar>(vapor.electrolyte);

        // Compare quantities, not bar values; the conversion is inexact.
        if pressure.value.is_nan() || pressure <= vapor_pressure {
            return Err(DomainError::VaporPressure {
                pressure,
                vapor_pressure,
            });
        }

        let excess = (pressure - vapor_pressure).get::<bar>();
        Ok(Self {
            t,
            e0: standard_potential(t),
            excess,
            activity_ratio: excess.powf(1.5) * vapor.pure_water / vapor.electrolyte,
            thermal_voltage: config.r() * t / config.nf(),
        })
    }

    /// `Eth = Erev0(T) − R·T·((P − pw)^1.5 · ppw/pw) / (n·F)`.
    pub(super) fn reversible(&self) -> ElectricPotential {
        ElectricPotential::new::<volt>(self.e0 - self.thermal_voltage * self.activity_ratio)
    }

    /// Logarithmic Nernst term plus the pressure virial corrections.
    pub(super) fn activity_corrected(&self) -> ElectricPotential {
        let Self {
            t,
            e0,
            excess,
            activity_ratio,
            thermal_voltage,
        } = *self;

        let linear = excess * (21.661e-6 - 5.471e-3 / t);
        let quadratic = excess.powi(2)
            * (-6.289e-6 / t + 0.135e-3 / t.powf(1.5) + 2.547e-3 / t.powi(2) - 0.4825 / t.powi(3));

        let erev = e0 + thermal_voltage * activity_ratio.ln() + linear + quadratic;
        ElectricPotential::new::<volt>(erev)
    }
}

/// Computes the water vapor pressure over the electrolyte.
///
/// This is the lower bound on operating pressure for [`reversible_voltage`].
///
/// # Errors
///
/// Returns [`DomainError::Temperature`] if the temperature is not strictly
/// positive and [`DomainError::Electrolyte`] if the vapor pressure fits leave
/// their physical range.
pub fn electrolyte_vapor_pressure(
    config: &ElectrolyzerConfig,
    temperature: ThermodynamicTemperature,
) -> Result<Pressure, DomainError> {
    let vapor = VaporPressures::at(config, temperature)?;
    Ok(Pressure::new::<bar>(vapor.electrolyte))
}

/// Computes the reversible cell voltage `Eth`.
///
/// `Eth = Erev0(T) − R·T·((P − pw)^1.5 · ppw/pw) / (n·F)`
///
/// # Errors
///
/// Returns [`DomainError::VaporPressure`] if `P ≤ pw(T)`,
/// [`DomainError::Temperature`] for a non-positive temperature and
/// [`DomainError::Electrolyte`] where the electrolyte fits break down.
pub fn reversible_voltage(
    config: &ElectrolyzerConfig,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<ElectricPotential, DomainError> {
    Nernst::new(config, pressure, temperature).map(|nernst| nernst.reversible())
}

/// Computes the activity-corrected reversible potential `Erev`.
///
/// Includes the logarithmic Nernst term and the pressure virial corrections.
/// Reported alongside `Eth` as a diagnostic; it does not enter the cell voltage.
///
/// # Errors
///
/// Same conditions as [`reversible_voltage`].
pub fn activity_corrected_voltage(
    config: &ElectrolyzerConfig,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<ElectricPotential, DomainError> {
    Nernst::new(config, pressure, temperature).map(|nernst| nernst.activity_corrected())
}
