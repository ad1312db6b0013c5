//! HTTP handlers for forecast and fishing score endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;
use shared::models::{FishingScoreReport, ForecastReport, WeatherObservation};
use shared::types::{GpsCoordinates, Language};
use shared::validation::{validate_coordinates, validate_forecast_days};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct ForecastQuery {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: Option<f64>,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub lon: Option<f64>,
    #[validate(range(min = 1, max = 7, message = "Forecast days must be between 1 and 7"))]
    pub days: Option<u32>,
    pub lang: Option<Language>,
}

/// Query parameters selecting the response language
#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<Language>,
}

/// Simulated forecast and fishing score for a location
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> AppResult<Json<ForecastReport>> {
    let Query(query) = query?;
    query.validate()?;

    let (lat, lon) = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(AppError::Validation {
                field: "coordinates".to_string(),
                message: "Coordinates are required".to_string(),
                message_ka: "კოორდინატები სავალდებულოა".to_string(),
            })
        }
    };

    // NaN passes the range checks above
    validate_coordinates(lat, lon).map_err(|message| AppError::Validation {
        field: "coordinates".to_string(),
        message: message.to_string(),
        message_ka: "კოორდინატები არასწორია".to_string(),
    })?;

    // Requested days were range-checked above; the configured default was not
    let days = match query.days {
        Some(days) => days,
        None => {
            let days = state.config.forecast.days;
            validate_forecast_days(days)
                .map_err(|message| AppError::Internal(format!("forecast.days: {}", message)))?;
            days
        }
    };
    let language = query.lang.unwrap_or(state.config.forecast.language);

    let service = WeatherService::new(state.config.scoring.options());
    let report = service.forecast(GpsCoordinates::new(lat, lon), days, language);
    Ok(Json(report))
}

/// Fishing score for caller-supplied weather readings
pub async fn calculate_fishing_score(
    State(state): State<AppState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
    body: Result<Json<WeatherObservation>, JsonRejection>,
) -> AppResult<Json<FishingScoreReport>> {
    let Query(query) = query?;
    let Json(observation) = body?;

    let language = query.lang.unwrap_or(state.config.forecast.language);
    let service = WeatherService::new(state.config.scoring.options());
    Ok(Json(service.score(&observation, language)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{create_app, AppState, Config};

    fn app_with(config: Config) -> axum::Router {
        create_app(AppState::new(config))
    }

    async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_forecast_returns_scored_days() {
        let (status, json) = send(
            app_with(Config::default()),
            get("/api/v1/weather/forecast?lat=41.7151&lon=44.8271&lang=en"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["inGeorgia"], true);
        assert_eq!(json["forecast"].as_array().unwrap().len(), 5);
        let score = json["fishingScore"]["score"].as_u64().unwrap();
        assert!((1..=10).contains(&score));
        assert!(json["current"]["moonPhase"].is_string());
    }

    #[tokio::test]
    async fn test_forecast_honours_days() {
        let (status, json) = send(
            app_with(Config::default()),
            get("/api/v1/weather/forecast?lat=41.7&lon=44.8&days=3"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["forecast"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_forecast_requires_coordinates() {
        let (status, json) =
            send(app_with(Config::default()), get("/api/v1/weather/forecast?lat=41.7")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["field"], "coordinates");
    }

    #[tokio::test]
    async fn test_forecast_rejects_out_of_range() {
        let (status, json) = send(
            app_with(Config::default()),
            get("/api/v1/weather/forecast?lat=120&lon=44.8"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["field"], "lat");

        let (status, _) = send(
            app_with(Config::default()),
            get("/api/v1/weather/forecast?lat=41.7&lon=44.8&days=30"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forecast_rejects_nan_latitude() {
        let (status, json) = send(
            app_with(Config::default()),
            get("/api/v1/weather/forecast?lat=NaN&lon=44.8"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_forecast_rejects_malformed_query() {
        let (status, json) = send(
            app_with(Config::default()),
            get("/api/v1/weather/forecast?lat=abc&lon=44.8"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "INVALID_QUERY");
    }

    #[tokio::test]
    async fn test_fishing_score_contract() {
        let body = r#"{"temperature": 20, "windSpeed": 10, "pressure": 1015,
                       "humidity": 50, "uvIndex": 1, "precipitation": 3}"#;
        let (status, json) = send(
            app_with(Config::default()),
            post_json("/api/v1/weather/fishing-score?lang=en", body),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["score"], 10);
        assert_eq!(json["description"], "Excellent - ideal conditions for fishing!");
        assert_eq!(json["factors"]["precipitation"], "light rain");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_fishing_score_defaults_optional_fields() {
        let body = r#"{"temperature": 5, "windSpeed": 18, "pressure": 1005, "humidity": 30}"#;
        let (status, json) = send(
            app_with(Config::default()),
            post_json("/api/v1/weather/fishing-score", body),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["score"], 4);
        assert_eq!(json["description"], "საშუალო - შესაძლოა რამე დაიჭიროთ");
        assert_eq!(json["factors"]["uv"], "საშუალო");
        assert_eq!(json["factors"]["precipitation"], "მშრალი");
    }

    #[tokio::test]
    async fn test_fishing_score_rejects_missing_fields() {
        let body = r#"{"temperature": 20, "windSpeed": 10}"#;
        let (status, json) = send(
            app_with(Config::default()),
            post_json("/api/v1/weather/fishing-score", body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_fishing_score_moon_bonus_from_config() {
        let mut config = Config::default();
        config.scoring.include_moon_phase_bonus = true;

        let body = r#"{"temperature": 5, "windSpeed": 18, "pressure": 1005,
                       "humidity": 30, "moonPhase": "full"}"#;
        let (status, json) = send(
            app_with(config),
            post_json("/api/v1/weather/fishing-score?lang=en", body),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["score"], 5);
        assert_eq!(json["factors"]["moon"], "favorable");
    }

    #[tokio::test]
    async fn test_misconfigured_default_days() {
        let mut config = Config::default();
        config.forecast.days = 0;

        let (status, json) =
            send(app_with(config), get("/api/v1/weather/forecast?lat=41.7&lon=44.8")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
