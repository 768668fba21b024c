//! Query DTOs - Data Transfer Objects per query di ricerca e ordinamento

use serde::{Deserialize, Serialize};

/// Campo di ordinamento per GET /films
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilmSortField {
    /// Rating decrescente
    #[default]
    Rating,
    /// Data di uscita crescente
    ReleaseDate,
    /// Titolo crescente (dipende dalla collation)
    Title,
}

impl FilmSortField {
    /// Qualsiasi valore non riconosciuto (o assente) ricade sul rating.
    pub fn parse(field: Option<&str>) -> Self {
        match field {
            Some("release_date") => Self::ReleaseDate,
            Some("title") => Self::Title,
            _ => Self::Rating,
        }
    }
}

/// Query parameters di GET /films?sort_by=...
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct FilmsQuery {
    #[serde(default)]
    pub sort_by: Option<String>,
}

impl FilmsQuery {
    pub fn sort_field(&self) -> FilmSortField {
        FilmSortField::parse(self.sort_by.as_deref())
    }
}

/// Query parameters di GET /film?title=... oppure ?actor=...
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct FilmSearchQuery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
}

/// Ricerca effettivamente richiesta da GET /film
#[derive(Debug, PartialEq)]
pub enum FilmSearch<'a> {
    Title(&'a str),
    Actor(&'a str),
    Sorted(FilmSortField),
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FilmSearchQuery {
    /// Il titolo ha la precedenza sull'attore; i valori vuoti contano come assenti.
    pub fn search(&self) -> FilmSearch<'_> {
        if let Some(title) = non_empty(&self.title) {
            FilmSearch::Title(title)
        } else if let Some(actor) = non_empty(&self.actor) {
            FilmSearch::Actor(actor)
        } else {
            FilmSearch::Sorted(FilmSortField::parse(self.sort_by.as_deref()))
        }
    }
}
