//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autorizzazione amministratore
//! - Configurazione e pool del database
//! - Gestione errori ed estrattori
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{AdminUser, admin_middleware};
pub use config::Config;
pub use database::DbPool;
pub use error::AppError;
pub use extract::{AppJson, AppPath, AppQuery};
pub use state::AppState;
