//! Result types for electrolyzer evaluation.

use uom::si::f64::{ElectricCurrent, ElectricPotential, ElectricalResistance, Power};

use crate::support::units::MolarFlowRate;

use super::{ActivationVoltage, OhmicResistance};

/// Per-cell voltage contributions at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageBreakdown {
    /// Reversible voltage `Eth`.
    pub reversible: ElectricPotential,

    /// Activity-corrected reversible potential `Erev`.
    ///
    /// Diagnostic only; not part of [`CellResult::cell_voltage`].
    pub activity_corrected: ElectricPotential,

    /// Anode and cathode activation overvoltages.
    pub activation: ActivationVoltage,

    /// Series resistance contributions.
    pub resistance: OhmicResistance,

    /// Total series resistance `r`.
    pub total_resistance: ElectricalResistance,

    /// Ohmic drop `r·I`.
    pub ohmic_drop: ElectricPotential,
}

/// Stack performance at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellResult {
    /// Stack current.
    pub current: ElectricCurrent,

    /// Per-cell voltage contributions.
    pub breakdown: VoltageBreakdown,

    /// Single-cell voltage `Eth + Vact_a + Vact_c + r·I`.
    pub cell_voltage: ElectricPotential,

    /// Stack voltage, `ncell · Vcell`.
    pub stack_voltage: ElectricPotential,

    /// Electrical power drawn by the stack.
    pub power: Power,

    /// Hydrogen production rate of the stack.
    pub hydrogen: MolarFlowRate,
}
