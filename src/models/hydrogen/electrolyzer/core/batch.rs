//! Evaluation over time series of operating points.

use rayon::prelude::*;
use thiserror::Error;
use uom::si::f64::{ElectricCurrent, ElectricPotential, Pressure, ThermodynamicTemperature};

use super::{CellResult, DomainError, ElectrolyzerConfig, OperatingPoint, evaluate};

/// Input columns of an [`OperatingSeries`] have different lengths.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error(
    "operating columns differ in length: voltage={voltage}, current={current}, \
     pressure={pressure}, temperature={temperature}"
)]
pub struct ShapeMismatchError {
    pub voltage: usize,
    pub current: usize,
    pub pressure: usize,
    pub temperature: usize,
}

/// Errors from fail-fast batch evaluation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BatchError {
    /// A sample could not be evaluated.
    #[error("sample {index} is outside the model domain")]
    Sample {
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// An ordered sequence of operating points.
///
/// # Example
///
/// ```
/// use twine_hydrogen::models::hydrogen::electrolyzer::OperatingSeries;
/// use uom::si::{
///     electric_current::ampere,
///     electric_potential::volt,
///     f64::{ElectricCurrent, ElectricPotential, Pressure, ThermodynamicTemperature},
///     pressure::bar,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let v = [ElectricPotential::new::<volt>(40.0); 3];
/// let i = [10.0, 20.0, 30.0].map(ElectricCurrent::new::<ampere>);
/// let p = [Pressure::new::<bar>(1.0); 3];
/// let t = [ThermodynamicTemperature::new::<kelvin>(333.15); 3];
///
/// let series = OperatingSeries::from_columns(&v, &i, &p, &t).unwrap();
/// assert_eq!(series.len(), 3);
///
/// assert!(OperatingSeries::from_columns(&v, &i[..2], &p, &t).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatingSeries {
    points: Vec<OperatingPoint>,
}

impl OperatingSeries {
    /// Builds a series from parallel columns of equal length.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatchError`] with every column length if they differ.
    pub fn from_columns(
        voltage: &[ElectricPotential],
        current: &[ElectricCurrent],
        pressure: &[Pressure],
        temperature: &[ThermodynamicTemperature],
    ) -> Result<Self, ShapeMismatchError> {
        let len = voltage.len();
        if current.len() != len || pressure.len() != len || temperature.len() != len {
            return Err(ShapeMismatchError {
                voltage: voltage.len(),
                current: current.len(),
                pressure: pressure.len(),
                temperature: temperature.len(),
            });
        }

        let points = voltage
            .iter()
            .zip(current)
            .zip(pressure)
            .zip(temperature)
            .map(|(((&v, &i), &p), &t)| OperatingPoint::new(v, i, p, t))
            .collect();

        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[OperatingPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<OperatingPoint>> for OperatingSeries {
    fn from(points: Vec<OperatingPoint>) -> Self {
        Self { points }
    }
}

fn logged(
    index: usize,
    result: Result<CellResult, DomainError>,
) -> Result<CellResult, DomainError> {
    if let Err(error) = &result {
        tracing::warn!(index, %error, "electrolyzer sample outside model domain");
    }
    result
}

/// Evaluates every point, keeping per-sample failures.
///
/// The output has one entry per input point, in input order.
pub fn evaluate_batch(
    config: &ElectrolyzerConfig,
    points: &[OperatingPoint],
) -> Vec<Result<CellResult, DomainError>> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| logged(index, evaluate(config, point)))
        .collect()
}

/// Evaluates every point, stopping at the first failure.
///
/// # Errors
///
/// Returns [`BatchError::Sample`] with the index of the first failing point.
pub fn evaluate_batch_fail_fast(
    config: &ElectrolyzerConfig,
    points: &[OperatingPoint],
) -> Result<Vec<CellResult>, BatchError> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            logged(index, evaluate(config, point))
                .map_err(|source| BatchError::Sample { index, source })
        })
        .collect()
}

/// Evaluates every point in parallel.
///
/// Results are in input order and identical to [`evaluate_batch`].
pub fn par_evaluate_batch(
    config: &ElectrolyzerConfig,
    points: &[OperatingPoint],
) -> Vec<Result<CellResult, DomainError>> {
    points
        .par_iter()
        .enumerate()
        .map(|(index, point)| logged(index, evaluate(config, point)))
        .collect()
}
