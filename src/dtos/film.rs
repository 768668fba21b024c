//! Film DTOs - Data Transfer Objects per film

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Body di PUT /films/{id}
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FilmRequestDTO {
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: i32,
}

/// Body di POST /films: il film più i nomi (non gli id) degli attori da collegare.
/// I nomi che non corrispondono a nessun attore vengono ignorati.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FilmWithActorsDTO {
    #[serde(flatten)]
    pub film: FilmRequestDTO,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub actors: Vec<String>,
}

// `"actors": null` vale come lista vuota
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl FilmWithActorsDTO {
    /// Nomi degli attori senza duplicati, nell'ordine in cui sono arrivati
    pub fn unique_actor_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.actors.len());
        for name in &self.actors {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }
}
