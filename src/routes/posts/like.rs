use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::post::{PostRes, RPostLike};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Claims;
use actix_web::{patch, web};
use std::sync::Arc;
use uuid::Uuid;

#[patch("/{id}/like")]
async fn like_post(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    data: web::Json<RPostLike>,
    claims: web::ReqData<Claims>,
) -> ApiResult<PostRes> {
    if data.user_id != claims.id {
        return Err(AppError::Forbidden("Cannot like on behalf of another user.".into()));
    }

    let post = db.toggle_post_like(path.into_inner(), data.user_id).await?;
    Ok(ApiResponse::Ok(post.into()))
}
