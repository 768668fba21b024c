//! Actor services - Gestione degli endpoint /actors

use crate::core::{AdminUser, AppError, AppJson, AppPath, AppState};
use crate::dtos::{ActorRequestDTO, BasicResponse};
use crate::entities::{Actor, ActorWithFilms};
use axum::{
    Extension,
    extract::{Json, State},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state, body), fields(admin_id = %admin_id, name = %body.name))]
pub async fn add_actor(
    State(state): State<Arc<AppState>>,
    Extension(AdminUser(admin_id)): Extension<AdminUser>, // inserito da admin_middleware
    AppJson(body): AppJson<ActorRequestDTO>,
) -> Result<Json<Actor>, AppError> {
    debug!("Adding actor");
    // 1. Il body è già stato validato dall'estrattore (400 se malformato)
    // 2. Se esiste già un attore con lo stesso nome viene restituito quello
    // 3. Altrimenti viene inserito e restituito con l'id assegnato
    let actor = state.actor.add_actor(&body).await?;
    info!("Actor {} ready", actor.id);
    Ok(Json(actor))
}

#[instrument(skip(state, body), fields(admin_id = %admin_id, actor_id = %actor_id))]
pub async fn update_actor(
    State(state): State<Arc<AppState>>,
    Extension(AdminUser(admin_id)): Extension<AdminUser>,
    AppPath(actor_id): AppPath<i32>, // parametro dalla URL /actors/{id}
    AppJson(body): AppJson<ActorRequestDTO>,
) -> Result<Json<BasicResponse>, AppError> {
    debug!("Updating actor");
    // un id inesistente non è un errore: la risposta resta "OK"
    state.actor.update_actor(actor_id, &body).await?;
    Ok(Json(BasicResponse::ok()))
}

#[instrument(skip(state), fields(admin_id = %admin_id, actor_id = %actor_id))]
pub async fn delete_actor(
    State(state): State<Arc<AppState>>,
    Extension(AdminUser(admin_id)): Extension<AdminUser>,
    AppPath(actor_id): AppPath<i32>,
) -> Result<Json<BasicResponse>, AppError> {
    debug!("Deleting actor");
    state.actor.delete_actor(actor_id).await?;
    Ok(Json(BasicResponse::ok()))
}

#[instrument(skip(state))]
pub async fn get_actors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ActorWithFilms>>, AppError> {
    debug!("Listing actors");
    let actors = state.actor.get_actors().await?;
    info!("Returning {} actors", actors.len());
    Ok(Json(actors))
}

#[instrument(skip(state), fields(actor_id = %actor_id))]
pub async fn get_actor(
    State(state): State<Arc<AppState>>,
    AppPath(actor_id): AppPath<i32>,
) -> Result<Json<ActorWithFilms>, AppError> {
    debug!("Fetching actor by ID");
    match state.actor.get_actor(actor_id).await? {
        Some(actor) => Ok(Json(actor)),
        None => {
            warn!("Actor not found");
            Err(AppError::not_found("Actor not found"))
        }
    }
}
