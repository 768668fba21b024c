//! Film entity - Entità film

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, FromRow)]
pub struct Film {
    pub id: i32,
    pub title: String,
    pub description: String,
    // serializzata come "YYYY-MM-DD"
    pub release_date: NaiveDate,
    // nessun vincolo sull'intervallo
    pub rating: i32,
}
