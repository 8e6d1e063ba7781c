//! Hydrogen inventory and pressure of a fixed-volume tank.

use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, Pressure, ThermodynamicTemperature, Time},
    pressure::atmosphere,
    thermodynamic_temperature::kelvin,
    time::second,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    units::MolarFlowRate,
};

use super::{StorageError, TankConfig};

/// Advances the tank inventory over one interval.
///
/// `n' = n + (ṅ_in − ṅ_out)·Δt`
///
/// # Errors
///
/// Returns [`StorageError::Domain`] for a negative inventory or flow or a
/// non-positive interval, and [`StorageError::Overdrawn`] if consumption
/// would leave the inventory negative.
pub fn balance(
    inventory: AmountOfSubstance,
    production: MolarFlowRate,
    consumption: MolarFlowRate,
    interval: Time,
) -> Result<AmountOfSubstance, StorageError> {
    let domain = |context: &'static str, value: f64| StorageError::Domain { context, value };

    let n = inventory.get::<mole>();
    NonNegative::check(&n).map_err(|_| domain("tank inventory must be non-negative", n))?;
    NonNegative::check(&production.value)
        .map_err(|_| domain("production must be non-negative", production.value))?;
    NonNegative::check(&consumption.value)
        .map_err(|_| domain("consumption must be non-negative", consumption.value))?;
    let dt = interval.get::<second>();
    StrictlyPositive::check(&dt).map_err(|_| domain("interval must be strictly positive", dt))?;

    let next = inventory + (production - consumption) * interval;
    if next.get::<mole>() < 0.0 {
        return Err(StorageError::Overdrawn { inventory: next });
    }

    Ok(next)
}

/// Computes tank pressure from the Beattie–Bridgeman equation of state.
///
/// With molar density `ρ = n/V` in mol/L,
///
/// `P = R·T·(1 − c·ρ/T³)·(ρ + B0·ρ²·(1 − b·ρ)) − A0·(1 − a·ρ)·ρ²`
///
/// in atmospheres. An empty tank has zero pressure.
///
/// # Errors
///
/// Returns [`StorageError::Domain`] for a negative inventory or a non-positive
/// temperature.
pub fn tank_pressure(
    config: &TankConfig,
    inventory: AmountOfSubstance,
    temperature: ThermodynamicTemperature,
) -> Result<Pressure, StorageError> {
    let n = inventory.get::<mole>();
    NonNegative::check(&n).map_err(|_| StorageError::Domain {
        context: "tank inventory must be non-negative",
        value: n,
    })?;
    let t = temperature.get::<kelvin>();
    StrictlyPositive::check(&t).map_err(|_| StorageError::Domain {
        context: "tank temperature must be strictly positive",
        value: t,
    })?;

    let eos = config.eos();
    let rho = n / config.liters();

    let repulsive = config.r_liter_atm()
        * t
        * (1.0 - eos.c * rho / t.powi(3))
        * (rho + eos.b0 * rho.powi(2) * (1.0 - eos.b * rho));
    let attractive = eos.a0 * (1.0 - eos.a * rho) * rho.powi(2);

    Ok(Pressure::new::<atmosphere>(repulsive - attractive))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::molar_flow_rate;

    fn moles(value: f64) -> AmountOfSubstance {
        AmountOfSubstance::new::<mole>(value)
    }

    fn seconds(value: f64) -> Time {
        Time::new::<second>(value)
    }

    fn kelvin_temp(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn balance_accumulates() {
        let mut inventory = moles(0.0);
        for _ in 0..3600 {
            inventory = balance(
                inventory,
                molar_flow_rate(1.2437e-3),
                molar_flow_rate(0.2437e-3),
                seconds(1.0),
            )
            .unwrap();
        }
        assert_relative_eq!(inventory.get::<mole>(), 3.6, max_relative = 1e-9);
    }

    #[test]
    fn balance_with_longer_interval() {
        let next = balance(
            moles(10.0),
            molar_flow_rate(0.5),
            molar_flow_rate(0.25),
            seconds(60.0),
        )
        .unwrap();
        assert_relative_eq!(next.get::<mole>(), 25.0);
    }

    #[test]
    fn overdraw_is_rejected() {
        let result = balance(
            moles(1.0),
            molar_flow_rate(0.0),
            molar_flow_rate(2.0),
            seconds(1.0),
        );
        let Err(StorageError::Overdrawn { inventory }) = result else {
            panic!("expected overdraw, got {result:?}");
        };
        assert_relative_eq!(inventory.get::<mole>(), -1.0);
    }

    #[test]
    fn balance_rejects_invalid_inputs() {
        let zero = molar_flow_rate(0.0);
        assert!(balance(moles(-1.0), zero, zero, seconds(1.0)).is_err());
        assert!(balance(moles(1.0), molar_flow_rate(-1.0), zero, seconds(1.0)).is_err());
        assert!(balance(moles(1.0), zero, zero, seconds(0.0)).is_err());
    }

    #[test]
    fn empty_tank_has_zero_pressure() {
        let config = TankConfig::default();
        let p = tank_pressure(&config, moles(0.0), kelvin_temp(298.15)).unwrap();
        assert_eq!(p.get::<atmosphere>(), 0.0);
    }

    #[test]
    fn low_inventory_is_nearly_ideal() {
        let config = TankConfig::default();
        let n = 1.0;
        let t = 298.15;

        let p = tank_pressure(&config, moles(n), kelvin_temp(t)).unwrap();
        let ideal = n * 8.3144 / 101.325 * t / 20_000.0;

        assert_relative_eq!(p.get::<atmosphere>(), ideal, max_relative = 1e-5);
    }

    #[test]
    fn pressure_rises_with_inventory() {
        let config = TankConfig::default();
        let t = kelvin_temp(298.15);

        let mut previous = 0.0;
        for n in [10.0, 100.0, 1_000.0, 10_000.0, 100_000.0] {
            let p = tank_pressure(&config, moles(n), t).unwrap().get::<atmosphere>();
            assert!(p > previous, "n={n} p={p} previous={previous}");
            previous = p;
        }
    }

    #[test]
    fn pressure_rejects_invalid_inputs() {
        let config = TankConfig::default();
        assert!(tank_pressure(&config, moles(-1.0), kelvin_temp(298.15)).is_err());
        assert!(tank_pressure(&config, moles(1.0), kelvin_temp(0.0)).is_err());
    }
}
