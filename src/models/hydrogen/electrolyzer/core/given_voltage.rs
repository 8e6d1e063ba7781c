//! Iterative solver for a measured stack voltage.
//!
//! Current-driven evaluation treats the operating point's voltage as unused.
//! This module instead holds the voltage fixed and varies the stack current
//! until the computed stack voltage matches it.

mod config;
mod error;
mod problem;

pub use config::GivenVoltageConfig;
pub use error::GivenVoltageError;

use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        electric_current::ampere,
        electric_potential::volt,
        f64::{ElectricCurrent, ElectricPotential},
    },
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{
    CellResult, ElectrolyzerConfig, OperatingPoint, resistance_breakdown, reversible_voltage,
};

use problem::{GivenVoltageModel, GivenVoltageProblem};

/// Solves for the stack current that produces `point.voltage`.
///
/// Uses bisection on current within the configured bracket. The current in
/// `point` is ignored. The lower end of the bracket is raised to the
/// configured parasitic current, below which the stack produces no hydrogen.
/// Stack voltage increases with current, so candidates the correlations
/// reject (high currents past full bubble coverage) are treated as
/// over-voltage.
///
/// # Errors
///
/// Returns [`GivenVoltageError`] if the bracket is invalid, the pressure or
/// temperature is outside the model domain, or the solver fails to converge.
pub fn given_voltage(
    config: &ElectrolyzerConfig,
    point: &OperatingPoint,
    solver: GivenVoltageConfig,
) -> Result<CellResult, GivenVoltageError> {
    let [min, max] = solver.bracket();
    let valid_min = StrictlyPositive::check(&min).is_ok();
    let min = min.max(config.parasitic_current().get::<ampere>());
    if !valid_min || max.is_nan() || max <= min {
        return Err(GivenVoltageError::Bracket {
            min: solver.min_current,
            max: solver.max_current,
        });
    }

    // Checks that do not depend on current.
    reversible_voltage(config, point.pressure, point.temperature)?;
    resistance_breakdown(config, ElectricCurrent::ZERO, point.temperature)?;

    let model = GivenVoltageModel::new(config, *point);
    let problem = GivenVoltageProblem::new(point.voltage);

    let solution = bisection::solve(
        &model,
        &problem,
        [min, max],
        &solver.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        tracing::debug!(
            target_voltage = point.voltage.get::<volt>(),
            residual = solution.residual,
            iters = solution.iters,
            "given-voltage solve did not converge"
        );
        return Err(GivenVoltageError::MaxIters {
            residual: ElectricPotential::new::<volt>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}
