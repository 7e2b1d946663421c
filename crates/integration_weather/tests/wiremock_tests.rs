//! Integration tests for the OpenWeatherMap client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! including the in-body `cod` status handling the upstream is known for.

use domain::{LocationSelector, Units};
use integration_weather::{OwmClient, OwmConfig, OwmError, WeatherApi};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample `/weather` response for testing
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "cod": 200,
        "id": 2643743,
        "name": "London",
        "dt": 1_600_000_000,
        "timezone": 3600,
        "main": {
            "temp": 18.5,
            "temp_min": 17.0,
            "temp_max": 20.0,
            "pressure": 1012,
            "humidity": 70
        },
        "weather": [
            {"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}
        ]
    })
}

/// Sample `/forecast` response for testing
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "message": 0,
        "city": {"id": 2643743, "name": "London", "country": "GB"},
        "list": [
            {
                "dt": 1_600_010_800,
                "main": {"temp": 19.0, "temp_min": 18.0, "temp_max": 20.0},
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}]
            },
            {
                "dt": 1_600_021_600,
                "main": {"temp": 14.0, "temp_min": 13.0, "temp_max": 15.0},
                "weather": [{"id": 500, "main": "Rain", "description": "light rain"}]
            }
        ]
    })
}

fn create_test_client(mock_server: &MockServer) -> OwmClient {
    let config = OwmConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        api_key: SecretString::from("test-key"),
    };
    #[allow(clippy::expect_used)]
    OwmClient::new(config).expect("Failed to create client")
}

fn london() -> LocationSelector {
    LocationSelector::Name("London".to_string())
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_current_conditions_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current(&london(), Units::Metric).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let current = result.unwrap();
    assert_eq!(current.id, 2_643_743);
    assert_eq!(current.name, "London");
    assert_eq!(current.dt, 1_600_000_000);
    assert!((current.main.temp - 18.5).abs() < 0.1);
}

#[tokio::test]
async fn test_forecast_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast(&london(), Units::Metric).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let forecast = result.unwrap();
    assert_eq!(forecast.city.name, "London");
    assert_eq!(forecast.list.len(), 2);
    assert_eq!(forecast.list[0].dt, 1_600_010_800);
}

// ============================================================================
// Upstream rejection via in-body cod
// ============================================================================

#[tokio::test]
async fn test_cod_rejection_with_http_200() {
    let mock_server = MockServer::start().await;

    // Upstream sometimes reports errors with HTTP 200 and a non-200 cod
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast(&london(), Units::Metric).await;

    let Err(OwmError::UpstreamRejected { status, message }) = result else {
        unreachable!("Expected UpstreamRejected, got: {result:?}");
    };
    assert_eq!(status, "404");
    assert_eq!(message, "city not found");
}

#[tokio::test]
async fn test_cod_rejection_with_http_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current(&london(), Units::Metric).await;

    assert!(
        matches!(result, Err(OwmError::UpstreamRejected { .. })),
        "Expected UpstreamRejected, got: {result:?}"
    );
}

// ============================================================================
// Transport error handling
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current(&london(), Units::Metric).await;

    assert!(
        matches!(result, Err(OwmError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit exceeded"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current(&london(), Units::Metric).await;

    assert!(
        matches!(result, Err(OwmError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current(&london(), Units::Metric).await;

    assert!(
        matches!(result, Err(OwmError::Payload(_))),
        "Expected Payload error, got: {result:?}"
    );
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_request_carries_credential_and_selector() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("APPID", "test-key"))
        .and(query_param("units", "metric"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current(&london(), Units::Metric).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_coordinate_selector_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", "51.5"))
        .and(query_param("lng", "-0.1"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let selector = LocationSelector::Coordinates {
        lat: 51.5,
        lng: -0.1,
    };
    let result = client.forecast(&selector, Units::Imperial).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_health_check_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await);
}

#[tokio::test]
async fn test_health_check_fails_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy().await);
}
