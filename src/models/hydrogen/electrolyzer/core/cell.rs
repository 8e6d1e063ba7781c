//! Cell and stack voltage aggregation and Faraday's law.

use uom::{
    ConstZero,
    si::{
        electric_current::ampere,
        f64::{ElectricCurrent, ElectricPotential, Power},
    },
};

use crate::support::units::{MolarFlowRate, molar_flow_rate};

use super::{
    CellResult, DomainError, ElectrolyzerConfig, OperatingPoint, VoltageBreakdown,
    activation::activation_voltage,
    input::amperes,
    ohmic::resistance_breakdown,
    reversible::Nernst,
};

/// On/off state of the whole stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StackState {
    #[default]
    On,
    /// Shut down or in standby; produces no hydrogen.
    Off,
}

/// Evaluates the stack at one operating point.
///
/// 1. `Eth` from pressure and temperature.
/// 2. Anode and cathode activation overvoltages.
/// 3. Series resistance `r`.
/// 4. `Vcell = Eth + Vact_a + Vact_c + r·I` and `Vstack = ncell·Vcell`.
/// 5. Hydrogen production from Faraday's law.
///
/// The operating point's voltage is not used.
///
/// # Errors
///
/// Returns the first [`DomainError`] raised by a sub-model, or
/// [`DomainError::NonFinite`] if a result is not finite.
pub fn evaluate(
    config: &ElectrolyzerConfig,
    point: &OperatingPoint,
) -> Result<CellResult, DomainError> {
    let nernst = Nernst::new(config, point.pressure, point.temperature)?;
    let reversible = nernst.reversible();
    let activity_corrected = nernst.activity_corrected();
    let activation = activation_voltage(config, point.temperature, point.current)?;
    let resistance = resistance_breakdown(config, point.current, point.temperature)?;

    let total_resistance = resistance.total();
    let ohmic_drop: ElectricPotential = total_resistance * point.current;

    let cell_voltage = reversible + activation.anode + activation.cathode + ohmic_drop;
    let stack_voltage = cell_voltage * config.cells();
    let power: Power = stack_voltage * point.current;

    let hydrogen = hydrogen_production(config, point.current)?;

    if !stack_voltage.value.is_finite() {
        return Err(DomainError::NonFinite {
            quantity: "stack voltage",
            point: *point,
        });
    }

    Ok(CellResult {
        current: point.current,
        breakdown: VoltageBreakdown {
            reversible,
            activity_corrected,
            activation,
            resistance,
            total_resistance,
            ohmic_drop,
        },
        cell_voltage,
        stack_voltage,
        power,
        hydrogen,
    })
}

/// Computes the stack's hydrogen production with Faraday's law.
///
/// `NH2 = ncell · I · ηF / (n·F)` with faradaic efficiency
/// `ηF = (I − I_loss) / I`, where `I_loss` is the configured parasitic current.
///
/// # Errors
///
/// Returns [`DomainError::Current`] for a negative current and
/// [`DomainError::ParasiticCurrent`] if `I_loss > I`.
pub fn hydrogen_production(
    config: &ElectrolyzerConfig,
    current: ElectricCurrent,
) -> Result<MolarFlowRate, DomainError> {
    let i = amperes(current)?;
    let parasitic = config.parasitic_current();
    let i_loss = parasitic.get::<ampere>();

    if i_loss > i {
        return Err(DomainError::ParasiticCurrent { current, parasitic });
    }

    Ok(molar_flow_rate(config.cells() * (i - i_loss) / config.nf()))
}

/// Returns the stack's hydrogen production, or zero when the stack is off.
///
/// An off stack short-circuits before any input is checked, so it yields zero
/// even for operating points outside the correlations' domain.
///
/// # Errors
///
/// Returns a [`DomainError`] from [`evaluate`] when the stack is on.
pub fn switchable_evaluate(
    config: &ElectrolyzerConfig,
    point: &OperatingPoint,
    state: StackState,
) -> Result<MolarFlowRate, DomainError> {
    match state {
        StackState::Off => Ok(MolarFlowRate::ZERO),
        StackState::On => evaluate(config, point).map(|result| result.hydrogen),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_potential::volt, power::watt};

    use crate::{
        models::hydrogen::electrolyzer::core::{activity_corrected_voltage, reversible_voltage},
        support::constraint::NonNegative,
    };

    fn point(amps: f64) -> OperatingPoint {
        OperatingPoint::from_raw(48.0, amps, 1.0, 333.15)
    }

    #[test]
    fn faraday_identity() {
        let config = ElectrolyzerConfig::default();
        let result = evaluate(&config, &point(10.0)).unwrap();

        // 24 cells at 10 A with two electrons per molecule.
        assert_relative_eq!(
            result.hydrogen.value,
            24.0 * 10.0 / (2.0 * 96485.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(result.hydrogen.value, 1.2437e-3, max_relative = 1e-4);
    }

    #[test]
    fn cell_voltage_sums_contributions() {
        let config = ElectrolyzerConfig::default();
        let result = evaluate(&config, &point(10.0)).unwrap();
        let b = &result.breakdown;

        let expected = b.reversible + b.activation.anode + b.activation.cathode + b.ohmic_drop;
        assert_relative_eq!(result.cell_voltage.get::<volt>(), expected.get::<volt>());
        assert_relative_eq!(
            result.stack_voltage.get::<volt>(),
            24.0 * result.cell_voltage.get::<volt>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.power.get::<watt>(),
            result.stack_voltage.get::<volt>() * 10.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let config = ElectrolyzerConfig::default();
        let first = evaluate(&config, &point(37.5)).unwrap();
        for _ in 0..10 {
            assert_eq!(evaluate(&config, &point(37.5)).unwrap(), first);
        }
    }

    #[test]
    fn input_voltage_does_not_affect_current_driven_results() {
        let config = ElectrolyzerConfig::default();
        let low = OperatingPoint::from_raw(10.0, 20.0, 1.0, 333.15);
        let high = OperatingPoint::from_raw(60.0, 20.0, 1.0, 333.15);

        assert_eq!(evaluate(&config, &low), evaluate(&config, &high));
    }

    #[test]
    fn production_scales_with_current() {
        let config = ElectrolyzerConfig::default();
        let one = evaluate(&config, &point(10.0)).unwrap().hydrogen.value;
        let two = evaluate(&config, &point(20.0)).unwrap().hydrogen.value;
        assert_relative_eq!(two, 2.0 * one, max_relative = 1e-12);
    }

    #[test]
    fn parasitic_current_reduces_production() {
        let loss = NonNegative::new(ElectricCurrent::new::<ampere>(2.0)).unwrap();
        let config = ElectrolyzerConfig::default().with_parasitic_current(loss);

        let nh2 = hydrogen_production(&config, ElectricCurrent::new::<ampere>(10.0)).unwrap();
        assert_relative_eq!(nh2.value, 24.0 * 8.0 / (2.0 * 96485.0), max_relative = 1e-12);

        assert!(matches!(
            hydrogen_production(&config, ElectricCurrent::new::<ampere>(1.0)),
            Err(DomainError::ParasiticCurrent { .. })
        ));
    }

    #[test]
    fn zero_current_produces_no_hydrogen() {
        let config = ElectrolyzerConfig::default();
        let nh2 = hydrogen_production(&config, ElectricCurrent::ZERO).unwrap();
        assert_eq!(nh2, MolarFlowRate::ZERO);
    }

    #[test]
    fn off_stack_short_circuits() {
        let config = ElectrolyzerConfig::default();

        // Below the vapor pressure, negative current and zero kelvin.
        let invalid = OperatingPoint::from_raw(0.0, -5.0, 0.0, 0.0);

        assert_eq!(
            switchable_evaluate(&config, &invalid, StackState::Off).unwrap(),
            MolarFlowRate::ZERO
        );
        assert_eq!(
            switchable_evaluate(&config, &point(10.0), StackState::Off).unwrap(),
            MolarFlowRate::ZERO
        );
        assert!(switchable_evaluate(&config, &invalid, StackState::On).is_err());
    }

    #[test]
    fn on_stack_delegates_to_evaluate() {
        let config = ElectrolyzerConfig::default();
        let expected = evaluate(&config, &point(10.0)).unwrap().hydrogen;
        let nh2 = switchable_evaluate(&config, &point(10.0), StackState::On).unwrap();
        assert_eq!(nh2, expected);
    }

    #[test]
    fn low_pressure_is_a_domain_error() {
        let config = ElectrolyzerConfig::default();
        let sample = OperatingPoint::from_raw(48.0, 10.0, 0.01, 333.15);

        assert!(matches!(
            evaluate(&config, &sample),
            Err(DomainError::VaporPressure { .. })
        ));
    }

    #[test]
    fn non_finite_stack_voltage_is_rejected() {
        let config = ElectrolyzerConfig::default();
        let sample = OperatingPoint::from_raw(48.0, 10.0, f64::INFINITY, 333.15);

        assert_eq!(
            evaluate(&config, &sample),
            Err(DomainError::NonFinite {
                quantity: "stack voltage",
                point: sample,
            })
        );
    }

    #[test]
    fn matches_public_reversible_potentials() {
        let config = ElectrolyzerConfig::default();
        let sample = point(25.0);
        let result = evaluate(&config, &sample).unwrap();

        assert_eq!(
            Ok(result.breakdown.reversible),
            reversible_voltage(&config, sample.pressure, sample.temperature)
        );
        assert_eq!(
            Ok(result.breakdown.activity_corrected),
            activity_corrected_voltage(&config, sample.pressure, sample.temperature)
        );
    }
}
