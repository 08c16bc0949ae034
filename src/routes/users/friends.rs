use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::FriendRes;
use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

#[get("/{id}/friends")]
async fn get_user_friends(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<FriendRes>> {
    let friends = db.list_friends(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(friends.into_iter().map(FriendRes::from).collect()))
}
