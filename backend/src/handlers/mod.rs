//! HTTP handlers

pub mod health;
pub mod recommendation;
pub mod weather;

pub use health::{health_check, root};
pub use recommendation::create_recommendations;
pub use weather::{get_soil, get_weather};
