//! Film services - Gestione degli endpoint /films e /film

use crate::core::{AdminUser, AppError, AppJson, AppPath, AppQuery, AppState};
use crate::dtos::{
    BasicResponse, FilmRequestDTO, FilmSearch, FilmSearchQuery, FilmWithActorsDTO, FilmsQuery,
};
use crate::entities::Film;
use axum::{
    Extension,
    extract::{Json, State},
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[instrument(skip(state, body), fields(admin_id = %admin_id, title = %body.film.title))]
pub async fn add_film(
    State(state): State<Arc<AppState>>,
    Extension(AdminUser(admin_id)): Extension<AdminUser>, // inserito da admin_middleware
    AppJson(body): AppJson<FilmWithActorsDTO>,
) -> Result<Json<Film>, AppError> {
    debug!("Adding film");
    // Gli attori vengono cercati per nome e devono esistere già:
    // quelli che non si trovano vengono saltati senza errore
    let film = state.film.add_film(&body).await?;
    info!("Film {} created", film.id);
    Ok(Json(film))
}

#[instrument(skip(state, body), fields(admin_id = %admin_id, film_id = %film_id))]
pub async fn update_film(
    State(state): State<Arc<AppState>>,
    Extension(AdminUser(admin_id)): Extension<AdminUser>,
    AppPath(film_id): AppPath<i32>, // parametro dalla URL /films/{id}
    AppJson(body): AppJson<FilmRequestDTO>,
) -> Result<Json<BasicResponse>, AppError> {
    debug!("Updating film");
    state.film.update_film(film_id, &body).await?;
    Ok(Json(BasicResponse::ok()))
}

#[instrument(skip(state), fields(admin_id = %admin_id, film_id = %film_id))]
pub async fn delete_film(
    State(state): State<Arc<AppState>>,
    Extension(AdminUser(admin_id)): Extension<AdminUser>,
    AppPath(film_id): AppPath<i32>,
) -> Result<Json<BasicResponse>, AppError> {
    debug!("Deleting film");
    state.film.delete_film(film_id).await?;
    Ok(Json(BasicResponse::ok()))
}

#[instrument(skip(state), fields(sort_by = ?params.sort_by))]
pub async fn get_films(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<FilmsQuery>, // query params /films?sort_by=title
) -> Result<Json<Vec<Film>>, AppError> {
    debug!("Listing films");
    // campo sconosciuto o assente -> rating decrescente
    let films = state.film.get_films_sorted(params.sort_field()).await?;
    Ok(Json(films))
}

#[instrument(skip(state), fields(title = ?params.title, actor = ?params.actor))]
pub async fn search_films(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<FilmSearchQuery>, // /film?title=... oppure /film?actor=...
) -> Result<Json<Vec<Film>>, AppError> {
    debug!("Searching films");
    // 1. title non vuoto -> prefisso del titolo
    // 2. altrimenti actor non vuoto -> prefisso del nome di un attore collegato
    // 3. altrimenti lista completa ordinata come GET /films
    let films = match params.search() {
        FilmSearch::Title(fragment) => state.film.get_films_by_title(fragment).await?,
        FilmSearch::Actor(fragment) => state.film.get_films_by_actor(fragment).await?,
        FilmSearch::Sorted(sort) => state.film.get_films_sorted(sort).await?,
    };
    info!("Found {} films", films.len());
    Ok(Json(films))
}
