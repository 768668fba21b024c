//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod actor;
pub mod film;
pub mod query;
pub mod response;

// Re-exports per facilitare l'import
pub use actor::ActorRequestDTO;
pub use film::{FilmRequestDTO, FilmWithActorsDTO};
pub use query::{FilmSearch, FilmSearchQuery, FilmSortField, FilmsQuery};
pub use response::BasicResponse;
