use uom::{
    si::{
        ISQ, Quantity, SI,
        amount_of_substance::mole,
        electric_charge::coulomb,
        f64::{AmountOfSubstance, ElectricCharge, Time},
        time::second,
    },
    typenum::{N1, P1, Z0},
};

/// Molar flow rate, mol/s in SI.
pub type MolarFlowRate = Quantity<ISQ<Z0, Z0, N1, Z0, Z0, P1, Z0>, SI<f64>, f64>;

/// Charge carried per mole, C/mol in SI (e.g., the Faraday constant).
pub type MolarCharge = Quantity<ISQ<Z0, Z0, P1, P1, Z0, N1, Z0>, SI<f64>, f64>;

/// Creates a [`MolarFlowRate`] from a value in mol/s.
#[must_use]
pub fn molar_flow_rate(mol_per_second: f64) -> MolarFlowRate {
    AmountOfSubstance::new::<mole>(mol_per_second) / Time::new::<second>(1.0)
}

/// Creates a [`MolarCharge`] from a value in C/mol.
#[must_use]
pub fn molar_charge(coulomb_per_mole: f64) -> MolarCharge {
    ElectricCharge::new::<coulomb>(coulomb_per_mole) / AmountOfSubstance::new::<mole>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::hour;

    #[test]
    fn builds_from_amount_over_time() {
        let per_hour: MolarFlowRate =
            AmountOfSubstance::new::<mole>(3600.0) / Time::new::<hour>(1.0);
        assert_relative_eq!(per_hour.value, 1.0);
        assert_relative_eq!(molar_flow_rate(2.5).value, 2.5);
    }

    #[test]
    fn faraday_current_to_molar_flow() {
        use uom::si::{electric_current::ampere, f64::ElectricCurrent};

        // One ampere carried by two electrons per molecule.
        let current = ElectricCurrent::new::<ampere>(1.0);
        let flow: MolarFlowRate = current / (molar_charge(96485.0) * 2.0);
        assert_relative_eq!(flow.value, 1.0 / 192_970.0);
    }

    #[test]
    fn integrates_to_amount() {
        let amount: AmountOfSubstance = molar_flow_rate(0.5) * Time::new::<second>(10.0);
        assert_relative_eq!(amount.get::<mole>(), 5.0);
    }
}
