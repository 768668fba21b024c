//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica risorsa.
//! Gli handler decodificano la richiesta, chiamano un repository e serializzano la risposta.

pub mod actor;
pub mod film;

// Re-exports per facilitare l'import
pub use actor::{add_actor, delete_actor, get_actor, get_actors, update_actor};
pub use film::{add_film, delete_film, get_films, search_films, update_film};

use crate::dtos::BasicResponse;
use axum::Json;

/// Root endpoint - health check
pub async fn root() -> Json<BasicResponse> {
    Json(BasicResponse::ok())
}
