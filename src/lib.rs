//! Filmbase library - espone i moduli principali per i test e per il binario

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use services::root;

use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(configure_actor_routes(state.clone()))
        .merge(configure_film_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configura le routes per la gestione degli attori
fn configure_actor_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::admin_middleware;
    use crate::services::*;

    Router::new()
        .route("/actors", get(get_actors).post(add_actor))
        .route(
            "/actors/{id}",
            get(get_actor).put(update_actor).delete(delete_actor),
        )
        .layer(middleware::from_fn_with_state(state, admin_middleware))
}

/// Configura le routes per la gestione dei film
fn configure_film_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::admin_middleware;
    use crate::services::*;

    Router::new()
        .route("/films", get(get_films).post(add_film))
        .route("/films/{id}", axum::routing::put(update_film).delete(delete_film))
        .route("/film", get(search_films))
        .layer(middleware::from_fn_with_state(state, admin_middleware))
}
