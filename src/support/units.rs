//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities at public boundaries
//! (e.g., current, pressure, temperature). This module provides quantities that
//! are useful for modeling but aren't included in [`uom`].
//!
//! ## Molar flow rates
//!
//! Hydrogen production and consumption are expressed as [`MolarFlowRate`]
//! (mol/s in SI). Build one from a plain number with [`molar_flow_rate`] or by
//! dividing an amount of substance by a time:
//!
//! ```
//! use uom::si::{
//!     amount_of_substance::mole,
//!     f64::{AmountOfSubstance, Time},
//!     time::second,
//! };
//! use twine_hydrogen::support::units::{MolarFlowRate, molar_flow_rate};
//!
//! let a: MolarFlowRate = AmountOfSubstance::new::<mole>(3.0) / Time::new::<second>(2.0);
//! let b = molar_flow_rate(1.5);
//! assert_eq!(a, b);
//! ```

mod quantities;

pub use quantities::{MolarCharge, MolarFlowRate, molar_charge, molar_flow_rate};
