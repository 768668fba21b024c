#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDate;
use filmbase::core::AppState;
use filmbase::dtos::{ActorRequestDTO, FilmRequestDTO, FilmSortField, FilmWithActorsDTO};
use filmbase::entities::{Actor, ActorWithFilms, Film};
use filmbase::repositories::{ActorRepository, FilmRepository, RoleRepository};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const ADMIN_ROLE: &str = "Администратор";
/// id di `service_user` con ruolo amministratore
pub const ADMIN_ID: &str = "1";
/// id di `service_user` con un ruolo qualsiasi
pub const USER_ID: &str = "2";

/// Database in memoria condiviso dalle tre implementazioni dei repository
#[derive(Default)]
pub struct MemoryDb {
    pub actors: Vec<Actor>,
    pub films: Vec<Film>,
    pub links: Vec<(i32, i32)>,
    pub roles: HashMap<i32, String>,
    next_actor_id: i32,
    next_film_id: i32,
}

impl MemoryDb {
    fn films_of(&self, actor_id: i32) -> Vec<Film> {
        self.links
            .iter()
            .filter(|(a, _)| *a == actor_id)
            .filter_map(|(_, f)| self.films.iter().find(|film| film.id == *f).cloned())
            .collect()
    }

    pub fn insert_actor(&mut self, name: &str, gender: &str, dob: NaiveDate) -> i32 {
        self.next_actor_id += 1;
        self.actors.push(Actor {
            id: self.next_actor_id,
            name: name.to_string(),
            gender: gender.to_string(),
            date_of_birth: dob,
        });
        self.next_actor_id
    }

    pub fn insert_film(&mut self, title: &str, release_date: NaiveDate, rating: i32) -> i32 {
        self.next_film_id += 1;
        self.films.push(Film {
            id: self.next_film_id,
            title: title.to_string(),
            description: format!("{} description", title),
            release_date,
            rating,
        });
        self.next_film_id
    }
}

/// Stato di test: il database in memoria più un interruttore che fa fallire ogni operazione
#[derive(Clone, Default)]
pub struct FakeStorage {
    pub db: Arc<Mutex<MemoryDb>>,
    pub broken: Arc<AtomicBool>,
}

impl FakeStorage {
    pub fn new() -> Self {
        let storage = Self::default();
        {
            let mut db = storage.db.lock().unwrap();
            db.roles.insert(1, ADMIN_ROLE.to_string());
            db.roles.insert(2, "Пользователь".to_string());
        }
        storage
    }

    /// Da qui in poi ogni operazione restituisce un errore di storage
    pub fn break_storage(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.broken.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolClosed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ActorRepository for FakeStorage {
    async fn add_actor(&self, data: &ActorRequestDTO) -> Result<Actor, sqlx::Error> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        if let Some(existing) = db.actors.iter().find(|a| a.name == data.name) {
            return Ok(existing.clone());
        }
        let id = db.insert_actor(&data.name, &data.gender, data.date_of_birth);
        Ok(db.actors.iter().find(|a| a.id == id).cloned().unwrap())
    }

    async fn update_actor(&self, id: i32, data: &ActorRequestDTO) -> Result<(), sqlx::Error> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        if let Some(actor) = db.actors.iter_mut().find(|a| a.id == id) {
            actor.name = data.name.clone();
            actor.gender = data.gender.clone();
            actor.date_of_birth = data.date_of_birth;
        }
        Ok(())
    }

    async fn delete_actor(&self, id: i32) -> Result<(), sqlx::Error> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        db.actors.retain(|a| a.id != id);
        // come ON DELETE CASCADE
        db.links.retain(|(a, _)| *a != id);
        Ok(())
    }

    async fn get_actors(&self) -> Result<Vec<ActorWithFilms>, sqlx::Error> {
        self.check()?;
        let db = self.db.lock().unwrap();
        Ok(db
            .actors
            .iter()
            .map(|actor| ActorWithFilms {
                actor: actor.clone(),
                films: db.films_of(actor.id),
            })
            .collect())
    }

    async fn get_actor(&self, id: i32) -> Result<Option<ActorWithFilms>, sqlx::Error> {
        self.check()?;
        let db = self.db.lock().unwrap();
        Ok(db.actors.iter().find(|a| a.id == id).map(|actor| ActorWithFilms {
            actor: actor.clone(),
            films: db.films_of(actor.id),
        }))
    }
}

#[async_trait]
impl FilmRepository for FakeStorage {
    async fn add_film(&self, data: &FilmWithActorsDTO) -> Result<Film, sqlx::Error> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        let film_id = db.insert_film(&data.film.title, data.film.release_date, data.film.rating);
        if let Some(film) = db.films.iter_mut().find(|f| f.id == film_id) {
            film.description = data.film.description.clone();
        }
        for name in data.unique_actor_names() {
            let actor_id = db.actors.iter().find(|a| a.name == name).map(|a| a.id);
            if let Some(actor_id) = actor_id {
                db.links.push((actor_id, film_id));
            }
        }
        Ok(db.films.iter().find(|f| f.id == film_id).cloned().unwrap())
    }

    async fn update_film(&self, id: i32, data: &FilmRequestDTO) -> Result<(), sqlx::Error> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        if let Some(film) = db.films.iter_mut().find(|f| f.id == id) {
            film.title = data.title.clone();
            film.description = data.description.clone();
            film.release_date = data.release_date;
            film.rating = data.rating;
        }
        Ok(())
    }

    async fn delete_film(&self, id: i32) -> Result<(), sqlx::Error> {
        self.check()?;
        let mut db = self.db.lock().unwrap();
        db.films.retain(|f| f.id != id);
        db.links.retain(|(_, f)| *f != id);
        Ok(())
    }

    async fn get_films_sorted(&self, sort: FilmSortField) -> Result<Vec<Film>, sqlx::Error> {
        self.check()?;
        let mut films = self.db.lock().unwrap().films.clone();
        match sort {
            FilmSortField::Rating => films.sort_by(|a, b| b.rating.cmp(&a.rating)),
            FilmSortField::ReleaseDate => films.sort_by_key(|f| f.release_date),
            FilmSortField::Title => films.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        Ok(films)
    }

    async fn get_films_by_title(&self, fragment: &str) -> Result<Vec<Film>, sqlx::Error> {
        self.check()?;
        let prefix = fragment.to_lowercase();
        let db = self.db.lock().unwrap();
        Ok(db
            .films
            .iter()
            .filter(|f| f.title.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect())
    }

    async fn get_films_by_actor(&self, fragment: &str) -> Result<Vec<Film>, sqlx::Error> {
        self.check()?;
        let prefix = fragment.to_lowercase();
        let db = self.db.lock().unwrap();
        let actor_ids: Vec<i32> = db
            .actors
            .iter()
            .filter(|a| a.name.to_lowercase().starts_with(&prefix))
            .map(|a| a.id)
            .collect();
        Ok(db
            .films
            .iter()
            .filter(|f| {
                db.links
                    .iter()
                    .any(|(a, film_id)| *film_id == f.id && actor_ids.contains(a))
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RoleRepository for FakeStorage {
    async fn find_role(&self, user_id: i32) -> Result<Option<String>, sqlx::Error> {
        self.check()?;
        Ok(self.db.lock().unwrap().roles.get(&user_id).cloned())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Crea un AppState che usa lo storage in memoria per tutti i repository
pub fn create_test_state(storage: &FakeStorage) -> Arc<AppState> {
    Arc::new(AppState::with_repositories(
        Box::new(storage.clone()),
        Box::new(storage.clone()),
        Box::new(storage.clone()),
        ADMIN_ROLE.to_string(),
    ))
}

/// Crea un TestServer per i test
pub fn create_test_server(storage: &FakeStorage) -> TestServer {
    let app = filmbase::create_router(create_test_state(storage));
    TestServer::new(app).expect("Failed to create test server")
}

/// Come `create_test_server`, ma i ruoli vengono letti da uno storage separato.
/// Serve per far fallire i repository dei dati lasciando passare l'autorizzazione.
pub fn create_test_server_with_roles(storage: &FakeStorage, roles: &FakeStorage) -> TestServer {
    let state = Arc::new(AppState::with_repositories(
        Box::new(storage.clone()),
        Box::new(storage.clone()),
        Box::new(roles.clone()),
        ADMIN_ROLE.to_string(),
    ));
    TestServer::new(filmbase::create_router(state)).expect("Failed to create test server")
}
