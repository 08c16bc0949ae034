use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};

// Liveness only, never touches the database.
#[get("")]
async fn health(_req: actix_web::HttpRequest) -> ApiResult<()> {
    Ok(ApiResponse::EmptyOk)
}
