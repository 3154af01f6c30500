//! Post and comment handlers.

use actix_web::{HttpResponse, web};

use blog_core::error::DomainError;
use blog_core::usecase::AddCommentRequest;
use blog_core::usecase::get_post::Request;
use blog_shared::dto::{GetPostQuery, NewComment};

use crate::middleware::auth::CallerPrincipal;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts/{slug}?fields=permissions,comments
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<Vec<(String, String)>>,
    CallerPrincipal(principal): CallerPrincipal,
) -> AppResult<HttpResponse> {
    let request = Request {
        slug: path.into_inner(),
        fields: GetPostQuery::from_pairs(query.into_inner()).fields,
        principal,
    };

    let cancel = state.request_token();
    let _guard = cancel.clone().drop_guard();

    let document = state.get_post.handle_cancellable(request, &cancel).await?;

    Ok(HttpResponse::Ok().json(document))
}

/// POST /api/posts/{slug}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    CallerPrincipal(principal): CallerPrincipal,
    body: web::Json<NewComment>,
) -> AppResult<HttpResponse> {
    let authenticated = principal.is_authenticated();
    let request = AddCommentRequest {
        slug: path.into_inner(),
        body: body.into_inner().body,
        principal,
    };

    let comment = state
        .add_comment
        .handle(request)
        .await
        .map_err(|e| match e {
            // Signed-in callers who are still denied get 403, not a sign-in prompt.
            DomainError::Unauthorized if authenticated => AppError::Forbidden,
            other => other.into(),
        })?;

    Ok(HttpResponse::Created().json(comment))
}
