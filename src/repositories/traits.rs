//! Repository capability traits
//!
//! This module defines the interfaces the HTTP layer depends on. Each trait has one
//! PostgreSQL implementation; tests plug in in-memory ones instead.
//!
//! Every operation runs in its own transaction: the first error aborts it, rolls it
//! back and is returned unchanged.

use crate::dtos::{ActorRequestDTO, FilmRequestDTO, FilmSortField, FilmWithActorsDTO};
use crate::entities::{Actor, ActorWithFilms, Film};
use async_trait::async_trait;
use sqlx::Error;

/// Operations on the `actor` table
#[async_trait]
pub trait ActorRepository: Send + Sync {
    /// Inserts a new actor, or returns the existing one with the same name
    ///
    /// # Returns
    /// * `Ok(Actor)` - The stored actor. If the name already existed, its stored
    ///   gender and date of birth are returned and the payload ones are ignored
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn add_actor(&self, data: &ActorRequestDTO) -> Result<Actor, Error>;

    /// Overwrites name, gender and date of birth. Succeeds silently if `id` does not exist.
    async fn update_actor(&self, id: i32, data: &ActorRequestDTO) -> Result<(), Error>;

    /// Deletes the actor. Succeeds silently if `id` does not exist.
    async fn delete_actor(&self, id: i32) -> Result<(), Error>;

    /// All actors in storage order, each with the films linked through `actor_film`
    async fn get_actors(&self) -> Result<Vec<ActorWithFilms>, Error>;

    /// A single actor with its films
    ///
    /// # Returns
    /// * `Ok(Some(ActorWithFilms))` - Actor found
    /// * `Ok(None)` - No actor with that id
    async fn get_actor(&self, id: i32) -> Result<Option<ActorWithFilms>, Error>;
}

/// Operations on the `film` and `actor_film` tables
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Inserts the film and links it to every listed actor that exists
    ///
    /// Names with no matching actor are skipped. Any other failure rolls back the
    /// whole creation, film row included.
    ///
    /// # Returns
    /// * `Ok(Film)` - Created film with the id assigned by the database
    async fn add_film(&self, data: &FilmWithActorsDTO) -> Result<Film, Error>;

    /// Overwrites title, description, release date and rating. Silent no-op if absent.
    async fn update_film(&self, id: i32, data: &FilmRequestDTO) -> Result<(), Error>;

    /// Deletes the film row. Association rows are left to the storage (cascade).
    async fn delete_film(&self, id: i32) -> Result<(), Error>;

    /// All films in the requested order
    async fn get_films_sorted(&self, sort: FilmSortField) -> Result<Vec<Film>, Error>;

    /// Films whose title starts with `fragment`, case-insensitive
    async fn get_films_by_title(&self, fragment: &str) -> Result<Vec<Film>, Error>;

    /// Films linked to an actor whose name starts with `fragment`, case-insensitive
    async fn get_films_by_actor(&self, fragment: &str) -> Result<Vec<Film>, Error>;
}

/// Role lookup for the admin gate
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Role string of the `service_user` with this id, `None` if there is no such user
    async fn find_role(&self, user_id: i32) -> Result<Option<String>, Error>;
}
