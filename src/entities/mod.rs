//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità persistite nel database (`actor`, `film`)
//! e le proiezioni in sola lettura costruite a partire da esse.

pub mod actor;
pub mod film;

// Re-exports per facilitare l'import
pub use actor::{Actor, ActorWithFilms};
pub use film::Film;
