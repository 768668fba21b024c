//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene i repository (come trait object, così i test possono sostituirli
//! con implementazioni in memoria) e il ruolo amministratore configurato.

use crate::core::DbPool;
use crate::repositories::{
    ActorRepository, FilmRepository, PgActorRepository, PgFilmRepository, PgRoleRepository,
    RoleRepository,
};

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli attori
    pub actor: Box<dyn ActorRepository>,

    /// Repository per la gestione dei film
    pub film: Box<dyn FilmRepository>,

    /// Lookup dei ruoli per il middleware di autorizzazione
    pub role: Box<dyn RoleRepository>,

    /// Ruolo richiesto per le richieste non-GET
    pub admin_role: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState con i repository PostgreSQL,
    /// tutti sullo stesso pool di connessioni.
    pub fn new(pool: DbPool, admin_role: String) -> Self {
        Self {
            actor: Box::new(PgActorRepository::new(pool.clone())),
            film: Box::new(PgFilmRepository::new(pool.clone())),
            role: Box::new(PgRoleRepository::new(pool)),
            admin_role,
        }
    }

    /// Crea un AppState con repository arbitrari (usato dai test).
    pub fn with_repositories(
        actor: Box<dyn ActorRepository>,
        film: Box<dyn FilmRepository>,
        role: Box<dyn RoleRepository>,
        admin_role: String,
    ) -> Self {
        Self {
            actor,
            film,
            role,
            admin_role,
        }
    }
}
