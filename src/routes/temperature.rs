use axum::{
    extract::Query, extract::State, http::header, http::StatusCode, response::IntoResponse,
    routing::get, Router,
};
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, error};

use crate::models::{TemperatureReading, TEMP_MAX_C, TEMP_MIN_C};
use crate::{sensors, SharedRng};

// ---

pub fn router() -> Router<SharedRng> {
    // ---
    Router::new().route("/temperature", get(handler))
}

/// Query parameters for the temperature endpoint. Both are optional
/// free-text strings; an empty value is treated the same as an absent
/// one.
#[derive(Debug, Deserialize)]
struct TemperatureQuery {
    location: Option<String>,
    sensor_id: Option<String>,
}

async fn handler(
    Query(params): Query<TemperatureQuery>,
    State(rng): State<SharedRng>,
) -> impl IntoResponse {
    // ---
    let (location, sensor_id) =
        sensors::resolve(params.location.as_deref(), params.sensor_id.as_deref());

    debug!(
        "GET /temperature - resolved location={:?} sensor_id={:?}",
        location, sensor_id
    );

    let value = {
        // A poisoned lock only means another handler panicked mid-draw;
        // the generator state underneath is still usable.
        let mut rng = match rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(TEMP_MIN_C..TEMP_MAX_C)
    };

    let reading = TemperatureReading::new(value, location, sensor_id);

    let body = match serde_json::to_string(&reading) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to encode temperature response: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to encode response",
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
