//! Weather service: resolves the requested location and proxies the provider

use serde_json::Value;

use crate::error::AppResult;
use crate::external::WeatherClient;

/// Weather lookups for the dashboard widget
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    default_location: String,
}

impl WeatherService {
    pub fn new(client: WeatherClient, default_location: String) -> Self {
        Self {
            client,
            default_location,
        }
    }

    /// Location used for a request, falling back to the configured default
    pub fn resolve_location<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.default_location)
    }

    /// Current conditions, passed through as the provider returned them
    pub async fn current(&self, location: &str) -> AppResult<Value> {
        self.client.get_current_weather(location).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_location_default() {
        let service = WeatherService::new(
            WeatherClient::new("key".to_string()),
            "India".to_string(),
        );
        assert_eq!(service.resolve_location(None), "India");
        assert_eq!(service.resolve_location(Some("Pune")), "Pune");
    }
}
