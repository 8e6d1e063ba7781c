//! Problem formulation for stack voltage matching.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential},
};

use crate::models::hydrogen::electrolyzer::core::{
    CellResult, DomainError, ElectrolyzerConfig, OperatingPoint, evaluate,
};

/// Model adapter that exposes stack current as the sole input variable.
///
/// Voltage, pressure and temperature are fixed by the operating point.
pub(super) struct GivenVoltageModel<'a> {
    config: &'a ElectrolyzerConfig,
    point: OperatingPoint,
}

impl<'a> GivenVoltageModel<'a> {
    pub(super) fn new(config: &'a ElectrolyzerConfig, point: OperatingPoint) -> Self {
        Self { config, point }
    }
}

impl Model for GivenVoltageModel<'_> {
    type Input = ElectricCurrent;
    type Output = CellResult;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate(self.config, &self.point.with_current(*input))
    }
}

/// Equation problem definition for stack voltage matching.
///
/// Computes the residual as `stack_voltage - target_voltage`.
pub(super) struct GivenVoltageProblem {
    target: ElectricPotential,
}

impl GivenVoltageProblem {
    pub(super) fn new(target: ElectricPotential) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for GivenVoltageProblem {
    type Input = ElectricCurrent;
    type Output = CellResult;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ElectricCurrent::new::<ampere>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let computed = output.stack_voltage.get::<volt>();
        let target = self.target.get::<volt>();
        Ok([computed - target])
    }
}
