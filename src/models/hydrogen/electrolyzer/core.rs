//! Steady-state voltage decomposition of an alkaline electrolyzer stack.
//!
//! The cell voltage is the sum of a reversible voltage, anode and cathode
//! activation overvoltages, and an ohmic drop across the electrodes,
//! electrolyte and membrane. Each contribution lives in its own module and is
//! a pure function of an [`ElectrolyzerConfig`] and the operating conditions.

mod activation;
mod batch;
mod cell;
mod config;
mod electrolyte;
mod error;
mod given_voltage;
mod input;
mod ohmic;
mod results;
mod reversible;

pub use activation::{ActivationVoltage, activation_voltage};
pub use batch::{
    BatchError, OperatingSeries, ShapeMismatchError, evaluate_batch, evaluate_batch_fail_fast,
    par_evaluate_batch,
};
pub use cell::{StackState, evaluate, hydrogen_production, switchable_evaluate};
pub use config::{CellGeometry, ConfigError, ElectrolyzerConfig, PhysicalConstants};
pub use electrolyte::{DerivedState, bubble_coverage, derived_state, molarity};
pub use error::{Conductor, DomainError, Electrode};
pub use given_voltage::{GivenVoltageConfig, GivenVoltageError, given_voltage};
pub use input::OperatingPoint;
pub use ohmic::{OhmicResistance, ohmic_resistance, resistance_breakdown};
pub use results::{CellResult, VoltageBreakdown};
pub use reversible::{activity_corrected_voltage, electrolyte_vapor_pressure, reversible_voltage};
