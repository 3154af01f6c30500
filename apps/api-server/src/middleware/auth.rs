//! Principal extraction from bearer tokens.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use blog_core::domain::{Anonymous, AuthenticatedUser, Principal};
use blog_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// The caller of the current request.
///
/// No `Authorization` header resolves to [`Anonymous`]. A header that is
/// present but not a valid bearer token is rejected with 401 rather than
/// downgraded to anonymous.
///
/// ```ignore
/// async fn handler(CallerPrincipal(principal): CallerPrincipal) -> impl Responder {
///     format!("authenticated: {}", principal.is_authenticated())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CallerPrincipal(pub Arc<dyn Principal>);

impl FromRequest for CallerPrincipal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_principal(req).map(CallerPrincipal))
    }
}

fn resolve_principal(req: &HttpRequest) -> Result<Arc<dyn Principal>, AppError> {
    let Some(auth_header) = req.headers().get(header::AUTHORIZATION) else {
        return Ok(Arc::new(Anonymous));
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    // Parse "Bearer <token>"
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))?;

    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("AppState not found in app data");
        return Err(AppError::Internal("Server configuration error".to_string()));
    };

    let Some(tokens) = state.tokens.as_ref() else {
        return Err(AuthError::InvalidToken(
            "Bearer authentication is not enabled on this server".to_string(),
        )
        .into());
    };

    let claims = tokens.validate_token(token)?;
    tracing::debug!(user_id = %claims.user_id, "Bearer token accepted");

    Ok(Arc::new(AuthenticatedUser::from(claims)))
}
