//! Domain models for the SpectraCrop advisory platform

mod measurement;
mod recommendation;

pub use measurement::*;
pub use recommendation::*;
