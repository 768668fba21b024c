use serde::{Deserialize, Serialize};

/// Risposta base: `{"status": "OK"}` per le mutazioni, il messaggio d'errore altrimenti
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BasicResponse {
    pub status: String,
}

impl BasicResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    pub fn ok() -> Self {
        Self::new("OK")
    }
}
