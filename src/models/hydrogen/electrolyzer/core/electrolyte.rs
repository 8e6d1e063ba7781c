//! KOH electrolyte properties shared by the voltage sub-models.

use uom::si::{
    area::square_meter,
    f64::{Area, ElectricCurrent, ThermodynamicTemperature},
};

use crate::support::constraint::{Constraint, StrictlyPositive, UnitIntervalUpperOpen};

use super::{
    DomainError, Electrode, ElectrolyzerConfig,
    input::{amperes, kelvins},
};

/// Molar mass of KOH, g/mol.
const KOH_MOLAR_MASS: f64 = 56.105;

/// Electrode state derived from an operating point.
///
/// Recomputed on every evaluation; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedState {
    /// KOH molarity, mol/L.
    pub molarity: f64,
    /// Fraction of the anode covered by gas bubbles.
    pub anode_coverage: f64,
    /// Fraction of the cathode covered by gas bubbles.
    pub cathode_coverage: f64,
    /// Anode area not covered by bubbles.
    pub anode_effective_area: Area,
    /// Cathode area not covered by bubbles.
    pub cathode_effective_area: Area,
}

/// Computes KOH molarity (mol/L) at a temperature.
///
/// # Errors
///
/// Returns [`DomainError::Temperature`] if the temperature is not strictly
/// positive and [`DomainError::Electrolyte`] if the fit is not positive there.
pub fn molarity(
    config: &ElectrolyzerConfig,
    temperature: ThermodynamicTemperature,
) -> Result<f64, DomainError> {
    let m = molarity_at(kelvins(temperature)?, config.weight_percent());
    StrictlyPositive::check(&m).map_err(|_| DomainError::Electrolyte {
        quantity: "molarity",
        value: m,
        temperature,
    })?;
    Ok(m)
}

/// Computes the fraction of an electrode covered by gas bubbles.
///
/// Uses `θ = 0.023·(I/S)^0.3` with `I/S` in A/m². Taking the current and area
/// as quantities keeps that unit contract out of the caller's hands.
///
/// # Errors
///
/// Returns [`DomainError::Current`] for a negative current and
/// [`DomainError::Area`] for a non-positive area.
pub fn bubble_coverage(current: ElectricCurrent, area: Area) -> Result<f64, DomainError> {
    let i = amperes(current)?;
    let s = square_meters(area)?;
    Ok(coverage_at(i / s))
}

/// Computes molarity, bubble coverage and effective electrode areas.
///
/// # Errors
///
/// Returns a [`DomainError`] if the temperature or current is invalid, or if
/// either electrode is fully covered by bubbles.
pub fn derived_state(
    config: &ElectrolyzerConfig,
    current: ElectricCurrent,
    temperature: ThermodynamicTemperature,
) -> Result<DerivedState, DomainError> {
    let molarity = molarity(config, temperature)?;

    let geometry = config.geometry();
    let anode_coverage = bubble_coverage(current, geometry.anode_area)?;
    let cathode_coverage = bubble_coverage(current, geometry.cathode_area)?;

    let anode_effective_area =
        effective_area(geometry.anode_area, anode_coverage, Electrode::Anode)?;
    let cathode_effective_area =
        effective_area(geometry.cathode_area, cathode_coverage, Electrode::Cathode)?;

    Ok(DerivedState {
        molarity,
        anode_coverage,
        cathode_coverage,
        anode_effective_area,
        cathode_effective_area,
    })
}

/// Molarity correlation for KOH solutions, T in kelvin.
pub(super) fn molarity_at(t: f64, weight_percent: f64) -> f64 {
    let wt = weight_percent;
    wt * (183.1221 - 0.56845 * t + 984.5679 * (wt / 115.96277).exp()) / 100.0 / KOH_MOLAR_MASS
}

/// Bubble coverage correlation, current density in A/m².
pub(super) fn coverage_at(current_density: f64) -> f64 {
    0.023 * current_density.powf(0.3)
}

/// Returns `S·(1 − θ)` if the coverage leaves any active area.
pub(super) fn effective_area(
    area: Area,
    coverage: f64,
    electrode: Electrode,
) -> Result<Area, DomainError> {
    UnitIntervalUpperOpen::check(&coverage)
        .map_err(|_| DomainError::FullyCovered { electrode, coverage })?;
    Ok(area * (1.0 - coverage))
}

fn square_meters(area: Area) -> Result<f64, DomainError> {
    let s = area.get::<square_meter>();
    StrictlyPositive::check(&s).map_err(|_| DomainError::Area { area })?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_centimeter, electric_current::ampere, thermodynamic_temperature::kelvin,
    };

    fn amps(value: f64) -> ElectricCurrent {
        ElectricCurrent::new::<ampere>(value)
    }

    #[test]
    fn molarity_of_30_wt_percent_koh() {
        let config = ElectrolyzerConfig::default();
        let t = ThermodynamicTemperature::new::<kelvin>(333.15);

        let expected =
            30.0 * (183.1221 - 0.56845 * 333.15 + 984.5679 * (30.0_f64 / 115.96277).exp())
                / 100.0
                / 56.105;
        let m = molarity(&config, t).unwrap();

        assert_relative_eq!(m, expected, max_relative = 1e-12);
        // Roughly 6.8 mol/L near operating temperature.
        assert!(m > 6.7 && m < 6.9, "m={m}");
    }

    #[test]
    fn molarity_falls_with_temperature() {
        let config = ElectrolyzerConfig::default();
        let cold = molarity(&config, ThermodynamicTemperature::new::<kelvin>(293.15)).unwrap();
        let hot = molarity(&config, ThermodynamicTemperature::new::<kelvin>(353.15)).unwrap();
        assert!(cold > hot);
    }

    #[test]
    fn molarity_is_rejected_where_the_fit_turns_negative() {
        let config = ElectrolyzerConfig::default();
        assert!(matches!(
            molarity(&config, ThermodynamicTemperature::new::<kelvin>(3000.0)),
            Err(DomainError::Electrolyte {
                quantity: "molarity",
                ..
            })
        ));
    }

    #[test]
    fn coverage_uses_amperes_per_square_meter() {
        // 10 A over 0.03 m² is 333.3 A/m² whatever unit the area was given in.
        let in_m2 = bubble_coverage(amps(10.0), Area::new::<square_meter>(0.03)).unwrap();
        let in_cm2 = bubble_coverage(amps(10.0), Area::new::<square_centimeter>(300.0)).unwrap();

        assert_relative_eq!(in_m2, 0.023 * (10.0_f64 / 0.03).powf(0.3), max_relative = 1e-12);
        assert_relative_eq!(in_m2, in_cm2, max_relative = 1e-12);
    }

    #[test]
    fn coverage_is_zero_without_current() {
        let theta = bubble_coverage(amps(0.0), Area::new::<square_meter>(0.03)).unwrap();
        assert_eq!(theta, 0.0);
    }

    #[test]
    fn coverage_rejects_invalid_inputs() {
        assert!(matches!(
            bubble_coverage(amps(-1.0), Area::new::<square_meter>(0.03)),
            Err(DomainError::Current { .. })
        ));
        assert!(matches!(
            bubble_coverage(amps(1.0), Area::new::<square_meter>(0.0)),
            Err(DomainError::Area { .. })
        ));
    }

    #[test]
    fn derived_state_reduces_effective_area() {
        let config = ElectrolyzerConfig::default();
        let state = derived_state(
            &config,
            amps(10.0),
            ThermodynamicTemperature::new::<kelvin>(333.15),
        )
        .unwrap();

        assert!(state.anode_coverage > 0.0 && state.anode_coverage < 1.0);
        assert_relative_eq!(state.anode_coverage, state.cathode_coverage);
        assert_relative_eq!(
            state.anode_effective_area.get::<square_meter>(),
            0.03 * (1.0 - state.anode_coverage),
            max_relative = 1e-12
        );
    }

    #[test]
    fn full_coverage_is_rejected() {
        let config = ElectrolyzerConfig::default();

        // θ reaches one near 2.9e5 A/m², about 8.7 kA on 0.03 m².
        let result = derived_state(
            &config,
            amps(20_000.0),
            ThermodynamicTemperature::new::<kelvin>(333.15),
        );

        assert!(matches!(
            result,
            Err(DomainError::FullyCovered {
                electrode: Electrode::Anode,
                ..
            })
        ));
    }
}
