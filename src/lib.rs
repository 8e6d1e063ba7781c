//! # Twine Hydrogen
//!
//! Alkaline electrolyzer and hydrogen storage models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Hydrogen production and storage [`twine_core::Model`]
//!   implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Units
//!
//! Every public quantity is a [`uom`] quantity. The electrochemical
//! correlations are empirical fits with fixed unit conventions (bar, kelvin,
//! A/m², S/cm); each model converts at its boundary so callers never handle
//! raw numbers in those units.
//!
//! ## Logging
//!
//! Batch evaluation and iterative solves emit [`tracing`] events. The crate
//! never installs a subscriber.

pub mod models;
pub mod support;
