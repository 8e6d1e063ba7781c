use thiserror::Error;
use uom::si::f64::{
    AmountOfSubstance, MolarHeatCapacity, Pressure, ThermodynamicTemperature, Volume,
};

/// Errors returned when compressor or tank configuration is invalid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StorageConfigError {
    #[error("invalid compressor outlet pressure: {pressure:?}")]
    OutletPressure { pressure: Pressure },
    #[error("invalid compressor outlet temperature: {temperature:?}")]
    OutletTemperature { temperature: ThermodynamicTemperature },
    #[error("compressor efficiency must be in (0, 1]: {efficiency}")]
    Efficiency { efficiency: f64 },
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: MolarHeatCapacity },
    #[error("invalid tank volume: {volume:?}")]
    Volume { volume: Volume },
}

/// Errors from compressor and tank evaluation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StorageError {
    /// An input is outside the range the compressor or tank model accepts.
    #[error("{context}: {value}")]
    Domain { context: &'static str, value: f64 },

    /// Consumption drew more hydrogen than the tank held.
    #[error("tank inventory would become negative: {inventory:?}")]
    Overdrawn { inventory: AmountOfSubstance },
}
