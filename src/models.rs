//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. The [`hydrogen`]
//! domain covers production by alkaline electrolysis and downstream
//! compression and storage.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; its public items are re-exported by the model module.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model-specific core API. A single `core` may be exposed through multiple
//! adapters (e.g., [`hydrogen::electrolyzer::Electrolyzer`] and
//! [`hydrogen::electrolyzer::SwitchedElectrolyzer`]).

pub mod hydrogen;
