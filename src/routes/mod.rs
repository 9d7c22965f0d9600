use axum::Router;

use crate::SharedRng;

mod health;
mod temperature;

// ---

pub fn router(rng: SharedRng) -> Router {
    // ---
    Router::new()
        .merge(temperature::router())
        .merge(health::router())
        .with_state(rng)
}
