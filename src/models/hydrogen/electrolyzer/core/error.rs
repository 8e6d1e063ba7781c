use std::fmt;

use thiserror::Error;
use uom::si::f64::{Area, ElectricCurrent, Pressure, ThermodynamicTemperature};

use super::OperatingPoint;

/// An electrode of an electrolysis cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Electrode {
    /// Oxygen-evolving electrode.
    Anode,
    /// Hydrogen-evolving electrode.
    Cathode,
}

impl fmt::Display for Electrode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anode => f.write_str("anode"),
            Self::Cathode => f.write_str("cathode"),
        }
    }
}

/// A conducting material in the cell's series resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conductor {
    /// Nickel electrodes.
    Nickel,
    /// KOH electrolyte.
    Electrolyte,
}

impl fmt::Display for Conductor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nickel => f.write_str("nickel"),
            Self::Electrolyte => f.write_str("electrolyte"),
        }
    }
}

/// An operating point drove a correlation outside its valid domain.
///
/// Every check happens where the correlation is evaluated, before any
/// logarithm, fractional power or division can produce NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// Temperature is zero, negative, or NaN in kelvin.
    #[error("temperature must be strictly positive: {temperature:?}")]
    Temperature { temperature: ThermodynamicTemperature },

    /// Current is negative or NaN.
    #[error("current must be non-negative: {current:?}")]
    Current { current: ElectricCurrent },

    /// An electrode area passed to a correlation is not strictly positive.
    #[error("electrode area must be strictly positive: {area:?}")]
    Area { area: Area },

    /// The electrolyte's water vapor pressure reaches the operating pressure.
    ///
    /// The Nernst correction raises `P − pw` to a fractional power.
    #[error("water vapor pressure {vapor_pressure:?} is not below operating pressure {pressure:?}")]
    VaporPressure {
        pressure: Pressure,
        vapor_pressure: Pressure,
    },

    /// An electrolyte property fit is not strictly positive at this temperature.
    #[error("electrolyte {quantity} must be strictly positive at {temperature:?}: {value}")]
    Electrolyte {
        quantity: &'static str,
        value: f64,
        temperature: ThermodynamicTemperature,
    },

    /// Gas bubbles cover the whole electrode, leaving no effective area.
    #[error("{electrode} is fully covered by gas bubbles: coverage={coverage}")]
    FullyCovered { electrode: Electrode, coverage: f64 },

    /// A Tafel logarithm argument is not strictly positive.
    #[error("{electrode} {quantity} must be strictly positive: {value}")]
    NonPositiveLogArgument {
        electrode: Electrode,
        quantity: &'static str,
        value: f64,
    },

    /// The bubble void fraction in the electrolyte reaches one.
    #[error("bubble void fraction must be below one: {void_fraction}")]
    VoidFraction { void_fraction: f64 },

    /// A conductivity correlation evaluates to zero.
    #[error("{conductor} conductivity is zero at {temperature:?}")]
    ZeroConductivity {
        conductor: Conductor,
        temperature: ThermodynamicTemperature,
    },

    /// The configured parasitic current exceeds the operating current.
    #[error("parasitic current {parasitic:?} exceeds operating current {current:?}")]
    ParasiticCurrent {
        current: ElectricCurrent,
        parasitic: ElectricCurrent,
    },

    /// A result was not finite despite every input check passing.
    #[error("non-finite {quantity} at {point:?}")]
    NonFinite {
        quantity: &'static str,
        point: OperatingPoint,
    },
}
