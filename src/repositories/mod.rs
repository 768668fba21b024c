//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità
//! ed espone le sue operazioni tramite un trait (vedi `traits`), così gli handler
//! non dipendono da PostgreSQL e i test possono usare implementazioni in memoria.

// ************************* NOTA SULLE QUERY ************************* //

/*
   Le query usano sqlx::query / query_as / query_scalar (controllo a run-time) e non le macro
   query! / query_as!: le macro vogliono un database raggiungibile (o i file .sqlx) già in fase
   di compilazione. Le entità derivano FromRow, quindi il parsing resta automatico:
   sqlx::query_as::<_, Film>("SELECT id, title, ... FROM film WHERE id = $1")
       .bind(id)
       .fetch_optional(&mut *tx)
       .await?;

   Ogni operazione apre la sua transazione:
       let mut tx = self.connection_pool.begin().await?;
       ... query su &mut *tx ...
       tx.commit().await?;
   Se una query fallisce il `?` esce prima del commit, la transazione viene droppata
   e sqlx fa il rollback da solo.
*/

// Dichiarazione dei sotto-moduli
pub mod actor;
pub mod film;
pub mod role;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{ActorRepository, FilmRepository, RoleRepository};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use actor::PgActorRepository;
pub use film::PgFilmRepository;
pub use role::PgRoleRepository;
