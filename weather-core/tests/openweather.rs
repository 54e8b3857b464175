use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weather_core::{Config, WeatherError, WeatherQuery, lookup_weather};

fn london_body(name: &str) -> serde_json::Value {
    json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "main": { "temp": 15.0, "feels_like": 14.3, "humidity": 60, "pressure": 1012 },
        "wind": { "speed": 4.1, "deg": 250 },
        "name": name,
        "cod": 200
    })
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({ "cod": "404", "message": "city not found" }))
}

fn config_for(server: &MockServer) -> Config {
    Config::default()
        .with_api_key("TEST_KEY")
        .with_base_url(server.uri())
}

fn query(city: &str) -> WeatherQuery {
    WeatherQuery {
        city: city.to_string(),
    }
}

#[tokio::test]
async fn sends_metric_query_with_key_and_maps_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body("London")))
        .expect(1)
        .mount(&server)
        .await;

    let result = lookup_weather(&config_for(&server), &Client::new(), &query("London!!"))
        .await
        .expect("lookup should succeed");

    assert_eq!(result.temp, 15.0);
    assert_eq!(result.description, "clear sky");
    assert_eq!(result.humidity, 60.0);
    assert_eq!(result.wind, 4.1);
    assert_eq!(result.city, "London");
}

#[tokio::test]
async fn not_found_two_words_falls_back_to_first_word() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Springfield Nowhere"))
        .respond_with(not_found())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Springfield"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body("Springfield")))
        .expect(1)
        .mount(&server)
        .await;

    let result = lookup_weather(
        &config_for(&server),
        &Client::new(),
        &query("Springfield Nowhere"),
    )
    .await
    .expect("fallback should succeed");

    assert_eq!(result.city, "Springfield");
}

#[tokio::test]
async fn fallback_miss_reports_unresolved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(not_found())
        .expect(2)
        .mount(&server)
        .await;

    let err = lookup_weather(&config_for(&server), &Client::new(), &query("Xyzzy Plugh"))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Unresolved(_)), "got {err:?}");
}

#[tokio::test]
async fn upstream_error_status_reports_unresolved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&server)
        .await;

    let err = lookup_weather(&config_for(&server), &Client::new(), &query("London"))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Unresolved(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_payload_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "London" })))
        .expect(1)
        .mount(&server)
        .await;

    let err = lookup_weather(&config_for(&server), &Client::new(), &query("London"))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_upstream_is_transport_error() {
    // Nothing listens on port 9 on a test host.
    let cfg = Config::default()
        .with_api_key("TEST_KEY")
        .with_base_url("http://127.0.0.1:9");

    let err = lookup_weather(&cfg, &Client::new(), &query("London"))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_key_never_reaches_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body("London")))
        .expect(0)
        .mount(&server)
        .await;

    let cfg = Config::default().with_base_url(server.uri());

    let err = lookup_weather(&cfg, &Client::new(), &query("London"))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Configuration));
}

#[tokio::test]
async fn identical_lookups_are_not_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body("London")))
        .expect(2)
        .mount(&server)
        .await;

    let cfg = config_for(&server);
    let http = Client::new();
    for _ in 0..2 {
        lookup_weather(&cfg, &http, &query("London"))
            .await
            .expect("lookup should succeed");
    }
}
