//! Actor entity - Entità attore e proiezione attore + film

use super::Film;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow)]
pub struct Actor {
    pub id: i32,
    /// Chiave naturale: non esistono due attori con lo stesso nome
    pub name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
}

/// Attore con i film collegati tramite `actor_film`.
/// Non è una tabella: viene composto dal repository.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActorWithFilms {
    #[serde(flatten)]
    pub actor: Actor,
    pub films: Vec<Film>,
}
