use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Pressure, ThermodynamicTemperature},
    pressure::bar,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive};

use super::DomainError;

/// A single steady-state operating sample of the stack.
///
/// Correlations read pressure in bar, temperature in kelvin and current in
/// amperes; conversions happen inside each sub-model.
///
/// `voltage` is the measured stack terminal voltage. Current-driven evaluation
/// ignores it; it is the target of the voltage-driven solve
/// ([`given_voltage`](super::given_voltage)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub voltage: ElectricPotential,
    pub current: ElectricCurrent,
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

impl OperatingPoint {
    #[must_use]
    pub fn new(
        voltage: ElectricPotential,
        current: ElectricCurrent,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            voltage,
            current,
            pressure,
            temperature,
        }
    }

    /// Creates an operating point from volts, amperes, bar and kelvin.
    #[must_use]
    pub fn from_raw(volts: f64, amperes: f64, bars: f64, kelvins: f64) -> Self {
        Self::new(
            ElectricPotential::new::<volt>(volts),
            ElectricCurrent::new::<ampere>(amperes),
            Pressure::new::<bar>(bars),
            ThermodynamicTemperature::new::<kelvin>(kelvins),
        )
    }

    /// Returns a copy with a different current, keeping other fields unchanged.
    #[must_use]
    pub fn with_current(self, current: ElectricCurrent) -> Self {
        Self { current, ..self }
    }
}

/// Returns the temperature in kelvin if strictly positive.
pub(super) fn kelvins(temperature: ThermodynamicTemperature) -> Result<f64, DomainError> {
    let t = temperature.get::<kelvin>();
    StrictlyPositive::check(&t).map_err(|_| DomainError::Temperature { temperature })?;
    Ok(t)
}

/// Returns the current in amperes if non-negative.
pub(super) fn amperes(current: ElectricCurrent) -> Result<f64, DomainError> {
    let i = current.get::<ampere>();
    NonNegative::check(&i).map_err(|_| DomainError::Current { current })?;
    Ok(i)
}
