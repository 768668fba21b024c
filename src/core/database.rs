//! Database gateway - creazione del pool PostgreSQL condiviso dai repository
//!
//! Il pool viene creato una sola volta in `main`, passato esplicitamente all'`AppState`
//! e chiuso allo spegnimento del server. Ogni operazione dei repository apre la propria
//! transazione con `pool.begin()`: il commit è esplicito, il rollback avviene al drop
//! della transazione (quindi su ogni `?` che ritorna un errore).

use crate::core::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, info, instrument};

// alias di tipo per il pool, in modo che i repository non dipendano dal driver scelto
pub type DbPool = PgPool;

/// Crea il pool di connessioni e verifica che il database risponda.
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn connect(config: &Config) -> Result<DbPool, sqlx::Error> {
    debug!("Creating database connection pool");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect(&config.database_url)
        .await?;

    ping(&pool).await?;
    info!("Database connection pool ready");
    Ok(pool)
}

/// Esegue una query banale per verificare la connessione.
pub async fn ping(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
