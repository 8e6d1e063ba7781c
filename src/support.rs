//! Supporting utilities used by the hydrogen models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.

pub mod constraint;
pub mod units;
