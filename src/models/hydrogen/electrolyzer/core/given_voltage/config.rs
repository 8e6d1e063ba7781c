use twine_solvers::equation::bisection;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential},
};

/// Solver configuration for matching a measured stack voltage.
#[derive(Debug, Clone, Copy)]
pub struct GivenVoltageConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Lower end of the current bracket.
    ///
    /// Must be strictly positive; the activation overvoltage diverges at zero current.
    pub min_current: ElectricCurrent,

    /// Upper end of the current bracket.
    pub max_current: ElectricCurrent,

    /// Absolute tolerance for the current search variable.
    pub current_tol: ElectricCurrent,

    /// Absolute tolerance for the stack voltage residual (computed - target).
    pub voltage_tol: ElectricPotential,
}

impl Default for GivenVoltageConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            min_current: ElectricCurrent::new::<ampere>(1e-6),
            max_current: ElectricCurrent::new::<ampere>(1000.0),
            current_tol: ElectricCurrent::new::<ampere>(1e-9),
            voltage_tol: ElectricPotential::new::<volt>(1e-9),
        }
    }
}

impl GivenVoltageConfig {
    /// Returns the current bracket in amperes.
    pub(super) fn bracket(&self) -> [f64; 2] {
        [
            self.min_current.get::<ampere>(),
            self.max_current.get::<ampere>(),
        ]
    }

    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.current_tol.get::<ampere>(),
            x_rel_tol: 0.0,
            residual_tol: self.voltage_tol.get::<volt>(),
        }
    }
}
