//! Library facade for the `temperature-api` mock sensor service.
//!
//! The service exposes two endpoints:
//! - `GET /temperature` – a synthetic temperature reading as JSON
//! - `/health` – liveness probe, any method
//!
//! This module follows the Explicit Module Boundary Pattern (EMBP) by
//! delegating sensor resolution to `sensors`, the response model to
//! `models`, and route registration to `routes`. The binary in
//! `main.rs` and the integration tests both mount the same [`app`]
//! router, so tests exercise the real routing and state wiring.

use std::sync::{Arc, Mutex};

use axum::Router;
use rand::{rngs::StdRng, SeedableRng};

pub mod models;
pub mod routes;
pub mod sensors;

pub use models::TemperatureReading;

// ---

/// TCP port the binary listens on. Fixed by design; this service reads
/// no functional configuration from the environment.
pub const PORT: u16 = 8081;

/// Random generator shared by all in-flight temperature requests.
///
/// Seeded once at process start and handed to the router as state.
/// Handlers hold the lock only for a single draw, so contention is
/// negligible at this service's scale.
pub type SharedRng = Arc<Mutex<StdRng>>;

/// Build the application router with a freshly seeded generator.
pub fn app() -> Router {
    // ---
    let rng: SharedRng = Arc::new(Mutex::new(StdRng::from_entropy()));
    routes::router(rng)
}
