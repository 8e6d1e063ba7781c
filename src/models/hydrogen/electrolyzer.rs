//! Alkaline electrolyzer stack models.
//!
//! This module provides [`twine_core::Model`] implementations for an alkaline
//! electrolyzer stack. The computational core is in the internal `core` module
//! and its types are re-exported here.
//!
//! - [`Electrolyzer`] maps an [`OperatingPoint`] to a full [`CellResult`].
//! - [`SwitchedElectrolyzer`] maps an operating point and on/off state to the
//!   stack's hydrogen production only.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_hydrogen::models::hydrogen::electrolyzer::{Electrolyzer, OperatingPoint};
//! use uom::si::electric_potential::volt;
//!
//! let stack = Electrolyzer::default();
//! let result = stack.call(&OperatingPoint::from_raw(0.0, 100.0, 1.0, 333.15)).unwrap();
//!
//! let volts = result.stack_voltage.get::<volt>();
//! assert!(volts > 24.0 * 1.2 && volts < 24.0 * 2.5);
//! ```

pub(crate) mod core;

pub use self::core::{
    ActivationVoltage, BatchError, CellGeometry, CellResult, Conductor, ConfigError, DerivedState,
    DomainError, Electrode, ElectrolyzerConfig, GivenVoltageConfig, GivenVoltageError,
    OhmicResistance, OperatingPoint, OperatingSeries, PhysicalConstants, ShapeMismatchError,
    StackState, VoltageBreakdown, activation_voltage, activity_corrected_voltage,
    bubble_coverage, derived_state, electrolyte_vapor_pressure, evaluate, evaluate_batch,
    evaluate_batch_fail_fast, given_voltage, hydrogen_production, molarity, ohmic_resistance,
    par_evaluate_batch, resistance_breakdown, reversible_voltage, switchable_evaluate,
};

use twine_core::Model;

use crate::support::units::MolarFlowRate;

/// An electrolyzer stack evaluated at a given current.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Electrolyzer {
    config: ElectrolyzerConfig,
}

impl Electrolyzer {
    #[must_use]
    pub fn new(config: ElectrolyzerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ElectrolyzerConfig {
        &self.config
    }

    /// Evaluates a series of operating points, keeping per-sample failures.
    #[must_use]
    pub fn evaluate_series(
        &self,
        series: &OperatingSeries,
    ) -> Vec<Result<CellResult, DomainError>> {
        evaluate_batch(&self.config, series.points())
    }

    /// Evaluates a series of operating points in parallel.
    #[must_use]
    pub fn par_evaluate_series(
        &self,
        series: &OperatingSeries,
    ) -> Vec<Result<CellResult, DomainError>> {
        par_evaluate_batch(&self.config, series.points())
    }

    /// Evaluates a series of operating points, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Sample`] with the index of the first failing point.
    pub fn try_evaluate_series(
        &self,
        series: &OperatingSeries,
    ) -> Result<Vec<CellResult>, BatchError> {
        evaluate_batch_fail_fast(&self.config, series.points())
    }

    /// Solves for the current that produces the operating point's voltage.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenVoltageError`] if the point is outside the model domain
    /// or the solver fails to converge.
    pub fn given_voltage(
        &self,
        point: &OperatingPoint,
        solver: GivenVoltageConfig,
    ) -> Result<CellResult, GivenVoltageError> {
        given_voltage(&self.config, point, solver)
    }
}

impl Model for Electrolyzer {
    type Input = OperatingPoint;
    type Output = CellResult;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(&self.config, input)
    }
}

/// Input to a [`SwitchedElectrolyzer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchedInput {
    pub point: OperatingPoint,
    pub state: StackState,
}

/// An electrolyzer stack that may be switched off.
///
/// Produces only the hydrogen flow rate, which is zero while the stack is off.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwitchedElectrolyzer {
    config: ElectrolyzerConfig,
}

impl SwitchedElectrolyzer {
    #[must_use]
    pub fn new(config: ElectrolyzerConfig) -> Self {
        Self { config }
    }
}

impl Model for SwitchedElectrolyzer {
    type Input = SwitchedInput;
    type Output = MolarFlowRate;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        switchable_evaluate(&self.config, &input.point, input.state)
    }
}
