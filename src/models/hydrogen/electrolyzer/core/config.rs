//! Fixed hardware and physical constants for an electrolyzer stack.

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, ElectricCurrent, Length, MolarHeatCapacity, Ratio},
        length::{centimeter, millimeter},
        molar_heat_capacity::joule_per_kelvin_mole,
        ratio::percent,
    },
};

use crate::support::{
    constraint::{Constrained, Constraint, NonNegative, StrictlyPositive},
    units::{MolarCharge, molar_charge},
};

/// Errors returned when electrolyzer configuration is invalid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid anode-membrane gap: {gap:?}")]
    AnodeMembraneGap { gap: Length },
    #[error("invalid cathode-membrane gap: {gap:?}")]
    CathodeMembraneGap { gap: Length },
    #[error("invalid anode area: {area:?}")]
    AnodeArea { area: Area },
    #[error("invalid cathode area: {area:?}")]
    CathodeArea { area: Area },
    #[error("invalid membrane area: {area:?}")]
    MembraneArea { area: Area },
    #[error("invalid anode height: {height:?}")]
    AnodeHeight { height: Length },
    #[error("invalid cathode height: {height:?}")]
    CathodeHeight { height: Length },
    #[error("invalid membrane thickness: {thickness:?}")]
    MembraneThickness { thickness: Length },
    #[error("stack must contain at least one cell")]
    Cells,
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: MolarHeatCapacity },
    #[error("invalid Faraday constant F: {f:?}")]
    FaradayConstant { f: MolarCharge },
    #[error("electrons transferred per molecule must be at least one")]
    Electrons,
    #[error("invalid KOH weight fraction: {weight_fraction:?}")]
    WeightFraction { weight_fraction: Ratio },
}

/// Physical dimensions of the cells in a stack.
///
/// Defaults describe the HRI stack: 24 cells with nickel electrodes and a
/// 0.5 mm Zirfon membrane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    /// Distance between the anode and the membrane.
    pub anode_membrane_gap: Length,
    /// Distance between the cathode and the membrane.
    pub cathode_membrane_gap: Length,
    /// Nominal anode surface area.
    pub anode_area: Area,
    /// Nominal cathode surface area.
    pub cathode_area: Area,
    /// Membrane surface area.
    pub membrane_area: Area,
    /// Anode height, the conduction path length through the electrode.
    pub anode_height: Length,
    /// Cathode height, the conduction path length through the electrode.
    pub cathode_height: Length,
    /// Membrane thickness.
    ///
    /// The membrane resistance correlation was fit at 0.5 mm and does not
    /// scale with this value; it is recorded for completeness.
    pub membrane_thickness: Length,
    /// Number of cells connected in series.
    pub cells: u32,
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            anode_membrane_gap: Length::new::<millimeter>(1.25),
            cathode_membrane_gap: Length::new::<millimeter>(1.25),
            anode_area: Area::new::<square_meter>(0.03),
            cathode_area: Area::new::<square_meter>(0.03),
            membrane_area: Area::new::<square_meter>(0.03),
            anode_height: Length::new::<centimeter>(45.0),
            cathode_height: Length::new::<centimeter>(45.0),
            membrane_thickness: Length::new::<millimeter>(0.5),
            cells: 24,
        }
    }
}

/// Physical constants used by the electrochemical correlations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Universal gas constant.
    pub gas_constant: MolarHeatCapacity,
    /// Faraday constant.
    pub faraday_constant: MolarCharge,
    /// Electrons transferred per hydrogen molecule produced.
    pub electrons: u32,
    /// KOH weight fraction of the electrolyte.
    ///
    /// The molarity correlation is only calibrated for 30 wt%.
    pub weight_fraction: Ratio,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.315),
            faraday_constant: molar_charge(96_485.0),
            electrons: 2,
            weight_fraction: Ratio::new::<percent>(30.0),
        }
    }
}

/// Validated configuration for an electrolyzer stack.
///
/// The configuration is immutable once built and is passed explicitly to every
/// evaluation, so any number of stack configurations can coexist.
///
/// # Example
///
/// ```
/// use twine_hydrogen::models::hydrogen::electrolyzer::{
///     CellGeometry, ElectrolyzerConfig, PhysicalConstants,
/// };
/// use uom::si::{area::square_meter, f64::Area};
///
/// let geometry = CellGeometry {
///     anode_area: Area::new::<square_meter>(0.05),
///     cathode_area: Area::new::<square_meter>(0.05),
///     ..CellGeometry::default()
/// };
///
/// let config = ElectrolyzerConfig::new(geometry, PhysicalConstants::default()).unwrap();
/// assert_eq!(config.geometry().cells, 24);
///
/// let bad = CellGeometry { cells: 0, ..CellGeometry::default() };
/// assert!(ElectrolyzerConfig::new(bad, PhysicalConstants::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectrolyzerConfig {
    geometry: CellGeometry,
    constants: PhysicalConstants,
    parasitic_current: ElectricCurrent,
}

impl Default for ElectrolyzerConfig {
    fn default() -> Self {
        Self {
            geometry: CellGeometry::default(),
            constants: PhysicalConstants::default(),
            parasitic_current: ElectricCurrent::ZERO,
        }
    }
}

impl ElectrolyzerConfig {
    /// Creates a configuration with no parasitic current.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first geometry or constant that is
    /// not physically valid.
    pub fn new(geometry: CellGeometry, constants: PhysicalConstants) -> Result<Self, ConfigError> {
        validate_geometry(&geometry)?;
        validate_constants(&constants)?;

        Ok(Self {
            geometry,
            constants,
            parasitic_current: ElectricCurrent::ZERO,
        })
    }

    /// Returns this configuration with a parasitic (shunt) current.
    ///
    /// Current lost to parasitic paths produces no hydrogen, so the faradaic
    /// efficiency becomes `(I − I_loss) / I`.
    #[must_use]
    pub fn with_parasitic_current(
        mut self,
        current: Constrained<ElectricCurrent, NonNegative>,
    ) -> Self {
        self.parasitic_current = current.into_inner();
        self
    }

    #[must_use]
    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    #[must_use]
    pub fn parasitic_current(&self) -> ElectricCurrent {
        self.parasitic_current
    }

    /// Gas constant in J/(mol·K).
    pub(super) fn r(&self) -> f64 {
        self.constants.gas_constant.value
    }

    /// Charge per mole of hydrogen, `n·F`, in C/mol.
    pub(super) fn nf(&self) -> f64 {
        f64::from(self.constants.electrons) * self.constants.faraday_constant.value
    }

    /// KOH weight percent, as used by the molarity correlation.
    pub(super) fn weight_percent(&self) -> f64 {
        self.constants.weight_fraction.get::<percent>()
    }

    pub(super) fn cells(&self) -> f64 {
        f64::from(self.geometry.cells)
    }
}

fn validate_geometry(geometry: &CellGeometry) -> Result<(), ConfigError> {
    let positive_length = |length: &Length| StrictlyPositive::check(&length.value).is_ok();
    let positive_area = |area: &Area| StrictlyPositive::check(&area.value).is_ok();

    if !positive_length(&geometry.anode_membrane_gap) {
        return Err(ConfigError::AnodeMembraneGap {
            gap: geometry.anode_membrane_gap,
        });
    }
    if !positive_length(&geometry.cathode_membrane_gap) {
        return Err(ConfigError::CathodeMembraneGap {
            gap: geometry.cathode_membrane_gap,
        });
    }
    if !positive_area(&geometry.anode_area) {
        return Err(ConfigError::AnodeArea {
            area: geometry.anode_area,
        });
    }
    if !positive_area(&geometry.cathode_area) {
        return Err(ConfigError::CathodeArea {
            area: geometry.cathode_area,
        });
    }
    if !positive_area(&geometry.membrane_area) {
        return Err(ConfigError::MembraneArea {
            area: geometry.membrane_area,
        });
    }
    if !positive_length(&geometry.anode_height) {
        return Err(ConfigError::AnodeHeight {
            height: geometry.anode_height,
        });
    }
    if !positive_length(&geometry.cathode_height) {
        return Err(ConfigError::CathodeHeight {
            height: geometry.cathode_height,
        });
    }
    if !positive_length(&geometry.membrane_thickness) {
        return Err(ConfigError::MembraneThickness {
            thickness: geometry.membrane_thickness,
        });
    }
    if StrictlyPositive::check(&geometry.cells).is_err() {
        return Err(ConfigError::Cells);
    }

    Ok(())
}

fn validate_constants(constants: &PhysicalConstants) -> Result<(), ConfigError> {
    if StrictlyPositive::check(&constants.gas_constant.value).is_err() {
        return Err(ConfigError::GasConstant {
            r: constants.gas_constant,
        });
    }
    if StrictlyPositive::check(&constants.faraday_constant.value).is_err() {
        return Err(ConfigError::FaradayConstant {
            f: constants.faraday_constant,
        });
    }
    if StrictlyPositive::check(&constants.electrons).is_err() {
        return Err(ConfigError::Electrons);
    }

    let weight_percent = constants.weight_fraction.get::<percent>();
    if StrictlyPositive::check(&weight_percent).is_err() || weight_percent >= 100.0 {
        return Err(ConfigError::WeightFraction {
            weight_fraction: constants.weight_fraction,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::electric_current::ampere;

    #[test]
    fn default_is_the_hri_stack() {
        let config = ElectrolyzerConfig::default();
        let geometry = config.geometry();

        assert_eq!(geometry.cells, 24);
        assert_relative_eq!(geometry.anode_membrane_gap.get::<millimeter>(), 1.25);
        assert_relative_eq!(geometry.anode_height.get::<centimeter>(), 45.0);
        assert_relative_eq!(geometry.membrane_area.get::<square_meter>(), 0.03);
        assert_relative_eq!(config.r(), 8.315);
        assert_relative_eq!(config.nf(), 192_970.0);
        assert_relative_eq!(config.weight_percent(), 30.0, epsilon = 1e-12);
        assert_eq!(config.parasitic_current(), ElectricCurrent::ZERO);
    }

    #[test]
    fn default_passes_validation() {
        let built =
            ElectrolyzerConfig::new(CellGeometry::default(), PhysicalConstants::default()).unwrap();
        assert_eq!(built, ElectrolyzerConfig::default());
    }

    #[test]
    fn rejects_non_positive_geometry() {
        let geometry = CellGeometry {
            cathode_area: Area::new::<square_meter>(0.0),
            ..CellGeometry::default()
        };
        assert!(matches!(
            ElectrolyzerConfig::new(geometry, PhysicalConstants::default()),
            Err(ConfigError::CathodeArea { .. })
        ));

        let geometry = CellGeometry {
            anode_membrane_gap: Length::new::<millimeter>(-1.0),
            ..CellGeometry::default()
        };
        assert!(matches!(
            ElectrolyzerConfig::new(geometry, PhysicalConstants::default()),
            Err(ConfigError::AnodeMembraneGap { .. })
        ));

        let geometry = CellGeometry {
            membrane_thickness: Length::new::<millimeter>(f64::NAN),
            ..CellGeometry::default()
        };
        assert!(matches!(
            ElectrolyzerConfig::new(geometry, PhysicalConstants::default()),
            Err(ConfigError::MembraneThickness { .. })
        ));
    }

    #[test]
    fn rejects_invalid_constants() {
        let constants = PhysicalConstants {
            electrons: 0,
            ..PhysicalConstants::default()
        };
        assert_eq!(
            ElectrolyzerConfig::new(CellGeometry::default(), constants),
            Err(ConfigError::Electrons)
        );

        let constants = PhysicalConstants {
            weight_fraction: Ratio::new::<percent>(100.0),
            ..PhysicalConstants::default()
        };
        assert!(matches!(
            ElectrolyzerConfig::new(CellGeometry::default(), constants),
            Err(ConfigError::WeightFraction { .. })
        ));
    }

    #[test]
    fn parasitic_current_must_be_non_negative() {
        let loss = NonNegative::new(ElectricCurrent::new::<ampere>(0.5)).unwrap();
        let config = ElectrolyzerConfig::default().with_parasitic_current(loss);
        assert_relative_eq!(config.parasitic_current().get::<ampere>(), 0.5);

        assert!(NonNegative::new(ElectricCurrent::new::<ampere>(-0.5)).is_err());
    }
}
