//! Hydrogen compression and storage models.
//!
//! Hydrogen leaves the electrolyzer near atmospheric pressure, passes through a
//! two-stage compressor and accumulates in a fixed-volume tank from which
//! vehicles draw. [`StorageTank`] advances the tank inventory by one interval
//! and reports the resulting tank pressure and compressor power.

pub(crate) mod core;

pub use self::core::{
    BeattieBridgeman, CompressorConfig, CompressorOutput, StorageConfigError, StorageError,
    TankConfig, balance, compress, tank_pressure,
};

use twine_core::Model;
use uom::si::f64::{AmountOfSubstance, Pressure, ThermodynamicTemperature, Time};

use crate::support::units::MolarFlowRate;

/// Input to a [`StorageTank`] for one interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankInput {
    /// Inventory at the start of the interval.
    pub inventory: AmountOfSubstance,
    /// Hydrogen delivered by the electrolyzer.
    pub production: MolarFlowRate,
    /// Hydrogen drawn by vehicles.
    pub consumption: MolarFlowRate,
    pub interval: Time,
    /// Electrolyzer outlet pressure, the compressor inlet.
    pub inlet_pressure: Pressure,
    /// Electrolyzer outlet temperature, the compressor inlet.
    pub inlet_temperature: ThermodynamicTemperature,
}

/// Tank state at the end of an interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankOutput {
    pub inventory: AmountOfSubstance,
    /// Tank pressure at the compressor outlet temperature.
    pub pressure: Pressure,
    pub compressor: CompressorOutput,
}

/// A compressor feeding a fixed-volume tank.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_hydrogen::{
///     models::hydrogen::storage::{StorageTank, TankInput},
///     support::units::molar_flow_rate,
/// };
/// use uom::si::{
///     amount_of_substance::mole,
///     f64::{AmountOfSubstance, Pressure, ThermodynamicTemperature, Time},
///     pressure::bar,
///     thermodynamic_temperature::kelvin,
///     time::second,
/// };
///
/// let tank = StorageTank::default();
/// let output = tank
///     .call(&TankInput {
///         inventory: AmountOfSubstance::new::<mole>(100.0),
///         production: molar_flow_rate(1.2e-3),
///         consumption: molar_flow_rate(0.0),
///         interval: Time::new::<second>(1.0),
///         inlet_pressure: Pressure::new::<bar>(1.0),
///         inlet_temperature: ThermodynamicTemperature::new::<kelvin>(333.15),
///     })
///     .unwrap();
///
/// assert!(output.inventory > AmountOfSubstance::new::<mole>(100.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StorageTank {
    compressor: CompressorConfig,
    tank: TankConfig,
}

impl StorageTank {
    #[must_use]
    pub fn new(compressor: CompressorConfig, tank: TankConfig) -> Self {
        Self { compressor, tank }
    }

    #[must_use]
    pub fn compressor(&self) -> &CompressorConfig {
        &self.compressor
    }

    #[must_use]
    pub fn tank(&self) -> &TankConfig {
        &self.tank
    }
}

impl Model for StorageTank {
    type Input = TankInput;
    type Output = TankOutput;
    type Error = StorageError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let compressor = compress(
            &self.compressor,
            input.production,
            input.inlet_pressure,
            input.inlet_temperature,
        )?;

        let inventory = balance(
            input.inventory,
            input.production,
            input.consumption,
            input.interval,
        )?;

        let pressure = tank_pressure(&self.tank, inventory, compressor.outlet_temperature)?;

        Ok(TankOutput {
            inventory,
            pressure,
            compressor,
        })
    }
}
