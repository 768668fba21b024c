//! Estrattori con rejection personalizzata
//!
//! Gli estrattori standard di axum rispondono con testo semplice e, per il JSON,
//! anche con 415/422. Questi wrapper fanno passare ogni rejection da `AppError`,
//! così il client riceve sempre `{"status": ...}` con codice 400.

use crate::core::AppError;
use axum_macros::{FromRequest, FromRequestParts};

/// Body JSON
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Parametri del path, es. `/actors/{id}`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string, es. `/films?sort_by=title`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
