//! Weather lookup pipeline: configuration check, sanitizing, upstream call
//! with a single first-word fallback.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    Config, WeatherQuery, WeatherResult,
    provider::{ProviderError, WeatherProvider, provider_from_config},
    sanitize::sanitize_city,
};

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather provider API key is not configured")]
    Configuration,

    #[error("city name contains no usable characters")]
    InvalidInput,

    #[error("upstream could not resolve location '{0}'")]
    Unresolved(String),

    #[error("failed to fetch weather data: {0:#}")]
    Transport(anyhow::Error),
}

/// Full pipeline for one `/api/weather` request.
///
/// The API key is checked before anything else, so a misconfigured server
/// never reaches the network.
pub async fn lookup_weather(
    config: &Config,
    http: &Client,
    query: &WeatherQuery,
) -> Result<WeatherResult, WeatherError> {
    let provider = provider_from_config(config, http).map_err(|e| match e {
        ProviderError::MissingApiKey => WeatherError::Configuration,
        other => WeatherError::Transport(other.into()),
    })?;

    let city = sanitize_city(&query.city);
    if city.is_empty() {
        return Err(WeatherError::InvalidInput);
    }

    resolve_with_fallback(provider.as_ref(), &city).await
}

/// Query `city`; on "not found" retry once with its first word when it has
/// more than one.
pub async fn resolve_with_fallback(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<WeatherResult, WeatherError> {
    let outcome = match provider.current_weather(city).await {
        Err(ProviderError::NotFound(_)) => match fallback_city(city) {
            Some(first) => {
                debug!(%city, fallback = first, "location not found, retrying with first word");
                provider.current_weather(first).await
            }
            None => Err(ProviderError::NotFound(city.to_string())),
        },
        other => other,
    };

    outcome.map_err(|e| match e {
        ProviderError::NotFound(_) | ProviderError::Status { .. } => {
            warn!(%city, error = %e, "upstream could not resolve location");
            WeatherError::Unresolved(city.to_string())
        }
        ProviderError::MissingApiKey => WeatherError::Configuration,
        ProviderError::Transport(cause) => WeatherError::Transport(cause),
    })
}

fn fallback_city(city: &str) -> Option<&str> {
    let mut words = city.split_whitespace();
    let first = words.next()?;
    words.next().map(|_| first)
}
