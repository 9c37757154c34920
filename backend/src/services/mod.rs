//! Business logic services for the SpectraCrop advisory service

pub mod recommendation;
pub mod soil;
pub mod weather;

pub use recommendation::RecommendationService;
pub use soil::SoilService;
pub use weather::WeatherService;
