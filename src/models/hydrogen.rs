//! Hydrogen production and storage models.
//!
//! - [`electrolyzer`]: Steady-state alkaline water electrolysis stack.
//!   Decomposes cell voltage into reversible, activation and ohmic terms and
//!   converts stack current into a hydrogen molar flow rate.
//! - [`storage`]: Compressor and fixed-volume tank fed by the electrolyzer's
//!   hydrogen flow and drained by vehicle consumption.
//!
//! The two models meet at a single quantity: the electrolyzer's
//! [`MolarFlowRate`](crate::support::units::MolarFlowRate) output.

pub mod electrolyzer;
pub mod storage;
