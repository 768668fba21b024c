//! FilmRepository - Repository per la gestione dei film e dei collegamenti con gli attori

use super::FilmRepository;
use crate::core::DbPool;
use crate::dtos::{FilmRequestDTO, FilmSortField, FilmWithActorsDTO};
use crate::entities::Film;
use async_trait::async_trait;
use sqlx::Error;
use tracing::{debug, info, instrument};

impl FilmSortField {
    /// Query completa per l'ordinamento richiesto
    fn select_query(self) -> &'static str {
        match self {
            Self::Rating => {
                "SELECT id, title, description, release_date, rating FROM film ORDER BY rating DESC"
            }
            Self::ReleaseDate => {
                "SELECT id, title, description, release_date, rating FROM film ORDER BY release_date"
            }
            Self::Title => {
                "SELECT id, title, description, release_date, rating FROM film ORDER BY title"
            }
        }
    }
}

/// Pattern ILIKE per una ricerca per prefisso: `\`, `%` e `_` del frammento
/// vengono confrontati letteralmente (la query usa `ESCAPE '\'`).
fn prefix_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("{}%", escaped)
}

// FILM REPOSITORY
pub struct PgFilmRepository {
    connection_pool: DbPool,
}

impl PgFilmRepository {
    pub fn new(connection_pool: DbPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl FilmRepository for PgFilmRepository {
    #[instrument(skip(self, data), fields(title = %data.film.title, actors = data.actors.len()))]
    async fn add_film(&self, data: &FilmWithActorsDTO) -> Result<Film, Error> {
        debug!("Adding film");
        let mut tx = self.connection_pool.begin().await?;

        let film = sqlx::query_as::<_, Film>(
            r#"
            INSERT INTO film (title, description, release_date, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, release_date, rating
            "#,
        )
        .bind(&data.film.title)
        .bind(&data.film.description)
        .bind(data.film.release_date)
        .bind(data.film.rating)
        .fetch_one(&mut *tx)
        .await?;

        let mut linked = 0;
        for name in data.unique_actor_names() {
            let actor_id: Option<i32> = sqlx::query_scalar("SELECT id FROM actor WHERE name = $1")
                .bind(name)
                .fetch_optional(&mut *tx)
                .await?;

            // gli attori vanno creati prima: i nomi sconosciuti vengono saltati
            let Some(actor_id) = actor_id else {
                debug!("Actor {:?} not found, skipping link", name);
                continue;
            };

            sqlx::query("INSERT INTO actor_film (actor_id, film_id) VALUES ($1, $2)")
                .bind(actor_id)
                .bind(film.id)
                .execute(&mut *tx)
                .await?;
            linked += 1;
        }

        tx.commit().await?;

        info!("Film created with id {} and {} actor links", film.id, linked);
        Ok(film)
    }

    #[instrument(skip(self, data), fields(film_id = %id))]
    async fn update_film(&self, id: i32, data: &FilmRequestDTO) -> Result<(), Error> {
        debug!("Updating film");
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE film
            SET title = $1, description = $2, release_date = $3, rating = $4
            WHERE id = $5
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.release_date)
        .bind(data.rating)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            debug!("No film with this id, nothing updated");
        } else {
            info!("Film updated successfully");
        }
        Ok(())
    }

    #[instrument(skip(self), fields(film_id = %id))]
    async fn delete_film(&self, id: i32) -> Result<(), Error> {
        debug!("Deleting film");
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query("DELETE FROM film WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            debug!("No film with this id, nothing deleted");
        } else {
            info!("Film deleted successfully");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_films_sorted(&self, sort: FilmSortField) -> Result<Vec<Film>, Error> {
        debug!("Listing films");
        let mut tx = self.connection_pool.begin().await?;

        let films = sqlx::query_as::<_, Film>(sort.select_query())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Retrieved {} films", films.len());
        Ok(films)
    }

    #[instrument(skip(self))]
    async fn get_films_by_title(&self, fragment: &str) -> Result<Vec<Film>, Error> {
        debug!("Searching films by title prefix");
        let mut tx = self.connection_pool.begin().await?;

        let pattern = prefix_pattern(fragment);
        let films = sqlx::query_as::<_, Film>(
            r#"
            SELECT id, title, description, release_date, rating
            FROM film
            WHERE title ILIKE $1 ESCAPE '\'
            "#,
        )
        .bind(pattern)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Found {} films matching title", films.len());
        Ok(films)
    }

    #[instrument(skip(self))]
    async fn get_films_by_actor(&self, fragment: &str) -> Result<Vec<Film>, Error> {
        debug!("Searching films by actor name prefix");
        let mut tx = self.connection_pool.begin().await?;

        // DISTINCT: più attori che corrispondono allo stesso film non lo duplicano
        let pattern = prefix_pattern(fragment);
        let films = sqlx::query_as::<_, Film>(
            r#"
            SELECT DISTINCT f.id, f.title, f.description, f.release_date, f.rating
            FROM film f
            INNER JOIN actor_film af ON f.id = af.film_id
            INNER JOIN actor a ON a.id = af.actor_id
            WHERE a.name ILIKE $1 ESCAPE '\'
            ORDER BY f.id
            "#,
        )
        .bind(pattern)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Found {} films matching actor", films.len());
        Ok(films)
    }
}
