//! Electrode activation overvoltage from Tafel kinetics.
//!
//! Transfer coefficients and exchange current densities are fit in kelvin.
//! Exchange current densities are tabulated in mA/cm² and converted to A/m²
//! here, so every current density in this module is in A/m².

use uom::si::{
    area::square_meter,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, ThermodynamicTemperature},
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{
    DomainError, Electrode, ElectrolyzerConfig,
    electrolyte::derived_state,
    input::{amperes, kelvins},
};

/// 1 mA/cm² expressed in A/m².
const MILLIAMP_PER_CM2: f64 = 10.0;

/// Anode and cathode activation overvoltages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationVoltage {
    pub anode: ElectricPotential,
    pub cathode: ElectricPotential,
}

/// Charge transfer coefficient of an electrode.
fn transfer_coefficient(electrode: Electrode, t: f64) -> f64 {
    match electrode {
        Electrode::Anode => 0.0675 + 0.00095 * t,
        Electrode::Cathode => 0.1175 + 0.00095 * t,
    }
}

/// Exchange current density of an electrode, A/m².
fn exchange_current_density(electrode: Electrode, t: f64) -> f64 {
    let milliamps_per_cm2 = match electrode {
        Electrode::Anode => 30.4 - 0.206 * t + 0.00035 * t * t,
        Electrode::Cathode => 13.72491 - 0.09055 * t + 0.09055 * t * t,
    };
    milliamps_per_cm2 * MILLIAMP_PER_CM2
}

/// Tafel overvoltage `b·log10(J/J0) + b·log10(1 − θ)`.
fn tafel(
    electrode: Electrode,
    tafel_slope: f64,
    current_density: f64,
    exchange_current_density: f64,
    coverage: f64,
) -> Result<f64, DomainError> {
    let positive = |quantity: &'static str, value: f64| {
        StrictlyPositive::check(&value).map_err(|_| DomainError::NonPositiveLogArgument {
            electrode,
            quantity,
            value,
        })
    };

    positive("exchange current density", exchange_current_density)?;
    let ratio = current_density / exchange_current_density;
    positive("current density ratio J/J0", ratio)?;

    Ok(tafel_slope * ratio.log10() + tafel_slope * (1.0 - coverage).log10())
}

/// Computes anode and cathode activation overvoltages.
///
/// 1. Transfer coefficients `a(T)` and Tafel slopes `b = 2.303·R·T/(n·F·a)`.
/// 2. Bubble coverage `θ` and effective area `S·(1 − θ)` on each electrode.
/// 3. Current density `J = I / S_eff` in A/m².
/// 4. Exchange current densities `J0(T)`.
/// 5. `Vact = b·log10(J/J0) + b·log10(1 − θ)`.
///
/// Pressure has no effect on these kinetics.
///
/// # Errors
///
/// Returns a [`DomainError`] if an electrode is fully covered by bubbles, if
/// `J0 ≤ 0`, or if `J/J0 ≤ 0` (which includes zero current).
pub fn activation_voltage(
    config: &ElectrolyzerConfig,
    temperature: ThermodynamicTemperature,
    current: ElectricCurrent,
) -> Result<ActivationVoltage, DomainError> {
    let t = kelvins(temperature)?;
    let i = amperes(current)?;
    let state = derived_state(config, current, temperature)?;

    let thermal = 2.303 * config.r() * t / config.nf();

    let electrode_voltage = |electrode: Electrode| {
        let (effective_area, coverage) = match electrode {
            Electrode::Anode => (state.anode_effective_area, state.anode_coverage),
            Electrode::Cathode => (state.cathode_effective_area, state.cathode_coverage),
        };
        let tafel_slope = thermal / transfer_coefficient(electrode, t);
        let current_density = i / effective_area.get::<square_meter>();

        tafel(
            electrode,
            tafel_slope,
            current_density,
            exchange_current_density(electrode, t),
            coverage,
        )
    };

    Ok(ActivationVoltage {
        anode: ElectricPotential::new::<volt>(electrode_voltage(Electrode::Anode)?),
        cathode: ElectricPotential::new::<volt>(electrode_voltage(Electrode::Cathode)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_current::ampere, thermodynamic_temperature::kelvin};

    fn operating(amps: f64) -> (ThermodynamicTemperature, ElectricCurrent) {
        (
            ThermodynamicTemperature::new::<kelvin>(333.15),
            ElectricCurrent::new::<ampere>(amps),
        )
    }

    #[test]
    fn exchange_current_density_is_converted_to_si() {
        let t = 333.15;
        let anode_ma_cm2 = 30.4 - 0.206 * t + 0.00035 * t * t;
        assert_relative_eq!(
            exchange_current_density(Electrode::Anode, t),
            anode_ma_cm2 * 10.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn matches_closed_form() {
        let config = ElectrolyzerConfig::default();
        let (temperature, current) = operating(10.0);
        let t = 333.15;

        let theta = 0.023 * (10.0_f64 / 0.03).powf(0.3);
        let j = 10.0 / (0.03 * (1.0 - theta));
        let a_a = 0.0675 + 0.00095 * t;
        let b_a = 2.303 * 8.315 * t / 2.0 / 96485.0 / a_a;
        let j0_a = (30.4 - 0.206 * t + 0.00035 * t * t) * 10.0;
        let expected = b_a * (j / j0_a).log10() + b_a * (1.0 - theta).log10();

        let vact = activation_voltage(&config, temperature, current).unwrap();
        assert_relative_eq!(vact.anode.get::<volt>(), expected, max_relative = 1e-9);
    }

    #[test]
    fn coverage_cancels_out_of_the_tafel_term() {
        // log10(J/J0) + log10(1 − θ) = log10(I/(S·J0)), so the overvoltage only
        // depends on the nominal current density.
        let config = ElectrolyzerConfig::default();
        let (temperature, current) = operating(25.0);
        let t = 333.15;

        let a_c = 0.1175 + 0.00095 * t;
        let b_c = 2.303 * 8.315 * t / 2.0 / 96485.0 / a_c;
        let j0_c = exchange_current_density(Electrode::Cathode, t);
        let expected = b_c * (25.0 / 0.03 / j0_c).log10();

        let vact = activation_voltage(&config, temperature, current).unwrap();
        assert_relative_eq!(vact.cathode.get::<volt>(), expected, max_relative = 1e-9);
    }

    #[test]
    fn overvoltage_rises_with_current() {
        let config = ElectrolyzerConfig::default();
        let (temperature, low) = operating(5.0);
        let (_, high) = operating(50.0);

        let low = activation_voltage(&config, temperature, low).unwrap();
        let high = activation_voltage(&config, temperature, high).unwrap();

        assert!(high.anode > low.anode);
        assert!(high.cathode > low.cathode);
    }

    #[test]
    fn zero_current_is_rejected() {
        let config = ElectrolyzerConfig::default();
        let (temperature, current) = operating(0.0);

        assert!(matches!(
            activation_voltage(&config, temperature, current),
            Err(DomainError::NonPositiveLogArgument {
                electrode: Electrode::Anode,
                ..
            })
        ));
    }
}
