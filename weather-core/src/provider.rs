use crate::{Config, WeatherResult, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Failure modes of a single upstream lookup.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no API key configured for the weather provider")]
    MissingApiKey,

    /// Upstream explicitly reported that it does not know the location.
    #[error("location '{0}' not found upstream")]
    NotFound(String),

    /// Any other non-success HTTP status.
    #[error("upstream request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, body read or payload decoding failure.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up current weather for an already sanitized city name.
    async fn current_weather(&self, city: &str) -> Result<WeatherResult, ProviderError>;
}

/// Construct the provider from config, sharing the caller's HTTP client.
///
/// Fails without touching the network when no API key is configured.
pub fn provider_from_config(
    config: &Config,
    http: &Client,
) -> Result<Box<dyn WeatherProvider>, ProviderError> {
    let api_key = config.api_key().ok_or(ProviderError::MissingApiKey)?;

    Ok(Box::new(OpenWeatherProvider::with_client(
        http.clone(),
        config.openweather.base_url.clone(),
        api_key.to_owned(),
    )))
}
