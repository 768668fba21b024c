//! ActorRepository - Repository per la gestione degli attori

use super::ActorRepository;
use crate::core::DbPool;
use crate::dtos::ActorRequestDTO;
use crate::entities::{Actor, ActorWithFilms, Film};
use async_trait::async_trait;
use sqlx::{Error, PgConnection};
use tracing::{debug, info, instrument};

// ACTOR REPOSITORY
pub struct PgActorRepository {
    connection_pool: DbPool,
}

impl PgActorRepository {
    pub fn new(connection_pool: DbPool) -> Self {
        Self { connection_pool }
    }
}

/// Film collegati a un attore, letti dentro la transazione del chiamante
pub(crate) async fn films_by_actor_id(
    conn: &mut PgConnection,
    actor_id: i32,
) -> Result<Vec<Film>, Error> {
    sqlx::query_as::<_, Film>(
        r#"
        SELECT f.id, f.title, f.description, f.release_date, f.rating
        FROM film f
        INNER JOIN actor_film af ON f.id = af.film_id
        WHERE af.actor_id = $1
        "#,
    )
    .bind(actor_id)
    .fetch_all(conn)
    .await
}

#[async_trait]
impl ActorRepository for PgActorRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn add_actor(&self, data: &ActorRequestDTO) -> Result<Actor, Error> {
        debug!("Adding actor");
        let mut tx = self.connection_pool.begin().await?;

        // Il nome è UNIQUE: in caso di conflitto l'update "vuoto" restituisce la riga
        // esistente così com'è, senza toccare gender e date_of_birth
        let actor = sqlx::query_as::<_, Actor>(
            r#"
            INSERT INTO actor (name, gender, date_of_birth)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, gender, date_of_birth
            "#,
        )
        .bind(&data.name)
        .bind(&data.gender)
        .bind(data.date_of_birth)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Actor stored with id {}", actor.id);
        Ok(actor)
    }

    #[instrument(skip(self, data), fields(actor_id = %id))]
    async fn update_actor(&self, id: i32, data: &ActorRequestDTO) -> Result<(), Error> {
        debug!("Updating actor");
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query(
            "UPDATE actor SET name = $1, gender = $2, date_of_birth = $3 WHERE id = $4",
        )
        .bind(&data.name)
        .bind(&data.gender)
        .bind(data.date_of_birth)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            debug!("No actor with this id, nothing updated");
        } else {
            info!("Actor updated successfully");
        }
        Ok(())
    }

    #[instrument(skip(self), fields(actor_id = %id))]
    async fn delete_actor(&self, id: i32) -> Result<(), Error> {
        debug!("Deleting actor");
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query("DELETE FROM actor WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            debug!("No actor with this id, nothing deleted");
        } else {
            info!("Actor deleted successfully");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_actors(&self) -> Result<Vec<ActorWithFilms>, Error> {
        debug!("Listing actors with films");
        let mut tx = self.connection_pool.begin().await?;

        let actors =
            sqlx::query_as::<_, Actor>("SELECT id, name, gender, date_of_birth FROM actor")
                .fetch_all(&mut *tx)
                .await?;

        // una query per attore, tutte nella stessa transazione
        let mut result = Vec::with_capacity(actors.len());
        for actor in actors {
            let films = films_by_actor_id(&mut tx, actor.id).await?;
            result.push(ActorWithFilms { actor, films });
        }

        tx.commit().await?;

        info!("Retrieved {} actors", result.len());
        Ok(result)
    }

    #[instrument(skip(self), fields(actor_id = %id))]
    async fn get_actor(&self, id: i32) -> Result<Option<ActorWithFilms>, Error> {
        debug!("Reading actor by id");
        let mut tx = self.connection_pool.begin().await?;

        let actor = sqlx::query_as::<_, Actor>(
            "SELECT id, name, gender, date_of_birth FROM actor WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let result = match actor {
            Some(actor) => {
                let films = films_by_actor_id(&mut tx, actor.id).await?;
                Some(ActorWithFilms { actor, films })
            }
            None => {
                debug!("Actor not found");
                None
            }
        };

        tx.commit().await?;
        Ok(result)
    }
}
