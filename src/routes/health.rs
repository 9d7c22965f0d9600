// src/routes/health.rs
//! API health check endpoint for the temperature service.
//!
//! This module defines the `/health` route used by container orchestrators
//! (e.g., Docker, Kubernetes) and CI pipelines to verify that the service is
//! running and able to respond to HTTP requests. It is a sibling module in the
//! `routes` directory and follows the Explicit Module Boundary Pattern (EMBP):
//! - Internal to this file: endpoint handler(s)
//! - Exports to the gateway (`mod.rs`): a subrouter containing the `/health` route
//!
//! The gateway merges this subrouter into the top-level API router so that
//! `main.rs` does not need to know about individual endpoints.

use axum::{routing::any, Router};

/// Handle any request to `/health`.
///
/// Returns a plain `OK` body regardless of method or query string. This
/// endpoint is deliberately lightweight and touches no other part of
/// the service.
async fn health() -> &'static str {
    "OK"
}

/// Create a subrouter containing the `/health` route.
///
/// This router is generic over the application state so it can merge cleanly
/// with the gateway router, regardless of the state type.
///
/// # Returns
/// A [`Router<S>`] with a single any-method `/health` route.
///
/// # Type Parameters
/// - `S`: Application state type shared by all routes in the gateway.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", any(health))
}
