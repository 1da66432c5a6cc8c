//! HTTP front end for the Vigenère toolkit (Axum).
//!
//! Exposes encryption, decryption and ciphertext-only attack as JSON
//! endpoints and turns error kinds into `400` responses.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with the default analysis config.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::cipher_routes())
        .merge(routes::analysis_routes())
        .with_state(state)
}
