//! `GET /api/weather` — current weather for a city.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use weather_core::{WeatherQuery, WeatherResult, lookup_weather};

use crate::AppState;
use crate::error::{AppError, AppResult};

pub const MIN_CITY_CHARS: usize = 2;

#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
}

pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> AppResult<Json<WeatherResult>> {
    let city = params
        .city
        .filter(|c| c.chars().count() >= MIN_CITY_CHARS)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "query parameter 'city' must be at least {MIN_CITY_CHARS} characters"
            ))
        })?;

    let result = lookup_weather(&state.config, &state.http, &WeatherQuery { city }).await?;

    Ok(Json(result))
}
