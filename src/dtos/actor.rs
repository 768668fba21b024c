//! Actor DTOs - Data Transfer Objects per attori

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body di POST /actors e PUT /actors/{id} (senza id, assegnato dal database)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActorRequestDTO {
    pub name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
}
