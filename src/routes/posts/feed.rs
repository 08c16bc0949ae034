use crate::db::postgres_service::PostgresService;
use crate::types::post::{to_post_list, PostRes};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
async fn feed(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<PostRes>> {
    Ok(ApiResponse::Ok(to_post_list(db.list_posts().await?)))
}
