use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::post::{to_post_list, PostRes, RPostCreate, RPostCreateForm};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Claims;
use crate::utils::uploads::store_picture;
use crate::utils::webutils::is_multipart;
use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{post, web};
use std::path::Path;
use std::sync::Arc;

/// Creates the post and answers with the refreshed feed, which is what the
/// client renders next anyway.
#[post("")]
async fn create_post(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RPostCreate>,
    claims: web::ReqData<Claims>,
) -> ApiResult<Vec<PostRes>> {
    publish(&db, data.into_inner(), None, &claims).await
}

#[post("", guard = "is_multipart")]
async fn create_post_form(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    MultipartForm(form): MultipartForm<RPostCreateForm>,
    claims: web::ReqData<Claims>,
) -> ApiResult<Vec<PostRes>> {
    let (data, picture) = form.into_parts();
    publish(&db, data, picture, &claims).await
}

async fn publish(
    db: &PostgresService,
    mut data: RPostCreate,
    picture: Option<TempFile>,
    claims: &Claims,
) -> ApiResult<Vec<PostRes>> {
    if data.user_id != claims.id {
        return Err(AppError::Forbidden("Cannot post as another user.".into()));
    }

    let author = db.get_user_by_id(&data.user_id).await?;
    if let Some(file) = picture {
        if let Some(stored) = store_picture(Path::new(&config().assets_dir), file).await? {
            data.picture_path = stored;
        }
    }
    db.create_post(&author, data.description, data.picture_path).await?;

    Ok(ApiResponse::Created(to_post_list(db.list_posts().await?)))
}
