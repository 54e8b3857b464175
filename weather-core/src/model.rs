use serde::{Deserialize, Serialize};

/// Raw city string as received from the `city` query parameter.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
}

/// Normalized current weather, serialized as-is to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    /// Degrees Celsius.
    pub temp: f64,
    pub description: String,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Wind speed, metres per second.
    pub wind: f64,
    /// City name as canonicalized by the provider.
    pub city: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatPrompt {
    pub prompt: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
}
