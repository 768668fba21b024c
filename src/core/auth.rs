use crate::core::{AppError, AppState};
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Method, http::Response, middleware::Next};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Identificativo del chiamante autorizzato, inserito nelle Extension della richiesta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminUser(pub i32);

/// Middleware che lascia passare le GET e richiede il ruolo amministratore per tutto il resto.
///
/// L'header `Authorization` contiene l'id numerico dell'utente; il ruolo viene letto
/// dalla tabella `service_user`. Header assente o malformato, utente sconosciuto,
/// errore di lookup o ruolo diverso producono tutti un 401.
#[instrument(skip(state, req, next), fields(method = %req.method(), path = %req.uri().path()))]
pub async fn admin_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    if req.method() == Method::GET {
        return Ok(next.run(req).await);
    }

    debug!("Running admin middleware");
    let user_id = match req.headers().get(http::header::AUTHORIZATION) {
        Some(header) => header
            .to_str()
            .ok()
            .and_then(|value| value.trim().parse::<i32>().ok())
            .ok_or_else(|| {
                warn!("Malformed authorization header");
                AppError::unauthorized()
            })?,
        None => {
            warn!("Missing authorization header");
            return Err(AppError::unauthorized());
        }
    };

    let role = match state.role.find_role(user_id).await {
        Ok(Some(role)) => role,
        Ok(None) => {
            warn!("User {} not found in service_user", user_id);
            return Err(AppError::unauthorized());
        }
        Err(e) => {
            warn!("Role lookup failed for user {}: {}", user_id, e);
            return Err(AppError::unauthorized());
        }
    };

    if role != state.admin_role {
        warn!("User {} has role {:?}, admin required", user_id, role);
        return Err(AppError::unauthorized());
    }

    info!("User {} authorized as admin", user_id);
    req.extensions_mut().insert(AdminUser(user_id));
    Ok(next.run(req).await)
}
