//! External API integrations

pub mod soil;
pub mod weather;

pub use soil::SoilClient;
pub use weather::WeatherClient;
