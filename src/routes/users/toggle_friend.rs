use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Claims;
use crate::types::user::FriendRes;
use actix_web::{patch, web};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

#[patch("/{id}/{friend_id}")]
async fn toggle_friend(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(Uuid, Uuid)>,
    claims: web::ReqData<Claims>,
) -> ApiResult<Vec<FriendRes>> {
    let (id, friend_id) = path.into_inner();

    // Only the owner edits their own friend list.
    if claims.id != id {
        warn!("User {} tried to edit friends of {}", claims.id, id);
        return Err(AppError::Forbidden("Cannot change another user's friends.".into()));
    }

    let friends = db.toggle_friendship(id, friend_id).await?;
    Ok(ApiResponse::Ok(friends.into_iter().map(FriendRes::from).collect()))
}
