//! Compressor and tank parameters.

use uom::si::{
    f64::{MolarHeatCapacity, Pressure, ThermodynamicTemperature, Volume},
    molar_heat_capacity::joule_per_kelvin_mole,
    pressure::atmosphere,
    thermodynamic_temperature::kelvin,
    volume::{cubic_meter, liter},
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::StorageConfigError;

/// Joules per liter-atmosphere.
const JOULES_PER_LITER_ATM: f64 = 101.325;

/// A compressor that delivers hydrogen at a fixed outlet state.
///
/// Compression is modeled as two polytropic stages with equal pressure ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorConfig {
    outlet_pressure: Pressure,
    outlet_temperature: ThermodynamicTemperature,
    efficiency: f64,
    gas_constant: MolarHeatCapacity,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            outlet_pressure: Pressure::new::<atmosphere>(200.0),
            outlet_temperature: ThermodynamicTemperature::new::<kelvin>(298.15),
            efficiency: 1.0,
            gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.3144),
        }
    }
}

impl CompressorConfig {
    /// Creates a compressor configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageConfigError`] if the outlet state or gas constant is
    /// not strictly positive, or the efficiency is outside `(0, 1]`.
    pub fn new(
        outlet_pressure: Pressure,
        outlet_temperature: ThermodynamicTemperature,
        efficiency: f64,
        gas_constant: MolarHeatCapacity,
    ) -> Result<Self, StorageConfigError> {
        if StrictlyPositive::check(&outlet_pressure.value).is_err() {
            return Err(StorageConfigError::OutletPressure {
                pressure: outlet_pressure,
            });
        }
        if StrictlyPositive::check(&outlet_temperature.get::<kelvin>()).is_err() {
            return Err(StorageConfigError::OutletTemperature {
                temperature: outlet_temperature,
            });
        }
        if StrictlyPositive::check(&efficiency).is_err() || efficiency > 1.0 {
            return Err(StorageConfigError::Efficiency { efficiency });
        }
        if StrictlyPositive::check(&gas_constant.value).is_err() {
            return Err(StorageConfigError::GasConstant { r: gas_constant });
        }

        Ok(Self {
            outlet_pressure,
            outlet_temperature,
            efficiency,
            gas_constant,
        })
    }

    #[must_use]
    pub fn outlet_pressure(&self) -> Pressure {
        self.outlet_pressure
    }

    #[must_use]
    pub fn outlet_temperature(&self) -> ThermodynamicTemperature {
        self.outlet_temperature
    }

    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    #[must_use]
    pub fn gas_constant(&self) -> MolarHeatCapacity {
        self.gas_constant
    }
}

/// Beattie–Bridgeman equation of state constants.
///
/// Units follow the published hydrogen table: liters, atmospheres, moles and
/// kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeattieBridgeman {
    /// atm·L²/mol²
    pub a0: f64,
    /// L/mol
    pub b0: f64,
    /// L/mol
    pub a: f64,
    /// L/mol
    pub b: f64,
    /// L·K³/mol
    pub c: f64,
}

impl BeattieBridgeman {
    /// Constants for hydrogen.
    pub const HYDROGEN: Self = Self {
        a0: 0.1975,
        b0: 0.02096,
        a: -0.00506,
        b: -0.04359,
        c: 504.0,
    };
}

impl Default for BeattieBridgeman {
    fn default() -> Self {
        Self::HYDROGEN
    }
}

/// A fixed-volume hydrogen storage tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankConfig {
    volume: Volume,
    gas_constant: MolarHeatCapacity,
    eos: BeattieBridgeman,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            volume: Volume::new::<cubic_meter>(20.0),
            gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.3144),
            eos: BeattieBridgeman::HYDROGEN,
        }
    }
}

impl TankConfig {
    /// Creates a tank configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageConfigError`] if the volume or gas constant is not
    /// strictly positive.
    pub fn new(
        volume: Volume,
        gas_constant: MolarHeatCapacity,
        eos: BeattieBridgeman,
    ) -> Result<Self, StorageConfigError> {
        if StrictlyPositive::check(&volume.value).is_err() {
            return Err(StorageConfigError::Volume { volume });
        }
        if StrictlyPositive::check(&gas_constant.value).is_err() {
            return Err(StorageConfigError::GasConstant { r: gas_constant });
        }

        Ok(Self {
            volume,
            gas_constant,
            eos,
        })
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn eos(&self) -> &BeattieBridgeman {
        &self.eos
    }

    pub(super) fn liters(&self) -> f64 {
        self.volume.get::<liter>()
    }

    /// Gas constant in L·atm/(mol·K).
    pub(super) fn r_liter_atm(&self) -> f64 {
        self.gas_constant.get::<joule_per_kelvin_mole>() / JOULES_PER_LITER_ATM
    }
}
