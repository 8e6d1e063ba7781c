use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{ElectricCurrent, ElectricPotential};

use crate::models::hydrogen::electrolyzer::core::DomainError;

/// Errors that can occur while solving for the current at a given stack voltage.
#[derive(Debug, Error)]
pub enum GivenVoltageError {
    /// The operating point is outside the model domain.
    #[error("stack evaluation failed")]
    Domain(#[from] DomainError),

    /// The current bracket is empty or not strictly positive.
    #[error("invalid current bracket: [{min:?}, {max:?}]")]
    Bracket {
        min: ElectricCurrent,
        max: ElectricCurrent,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best stack voltage residual achieved.
        residual: ElectricPotential,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
