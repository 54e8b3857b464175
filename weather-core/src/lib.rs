//! Core library for the weather proxy server.
//!
//! This crate defines:
//! - Configuration (defaults, TOML file, environment)
//! - City name sanitizing
//! - The OpenWeather provider and the lookup pipeline with its fallback
//! - The mock chat reply
//! - Shared domain models
//!
//! It is used by `weather-server`, but has no dependency on any HTTP server
//! framework.

pub mod chat;
pub mod config;
pub mod model;
pub mod provider;
pub mod sanitize;
pub mod weather;

pub use config::{Config, OpenWeatherConfig};
pub use model::{ChatPrompt, ChatReply, WeatherQuery, WeatherResult};
pub use provider::{ProviderError, WeatherProvider};
pub use weather::{WeatherError, lookup_weather};
