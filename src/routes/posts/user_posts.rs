use crate::db::postgres_service::PostgresService;
use crate::types::post::{to_post_list, PostRes};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

// An unknown author just has no posts.
#[get("/{user_id}/posts")]
async fn user_posts(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<PostRes>> {
    let posts = db.list_posts_for_user(path.into_inner()).await?;
    Ok(ApiResponse::Ok(to_post_list(posts)))
}
