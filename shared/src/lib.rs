//! Shared types and models for the SpectraCrop advisory platform
//!
//! This crate contains the pure domain logic shared between the backend,
//! the browser dashboard (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
