use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, RUserRegisterForm, UserRes};
use crate::utils::token::hash_password;
use crate::utils::uploads::store_picture;
use crate::utils::webutils::is_multipart;
use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{post, web};
use std::path::Path;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[post("/register")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserRes> {
    register_user(&db, body.into_inner(), None).await
}

/// Same as [`register`], for browser forms that attach a `picture`.
#[post("/register", guard = "is_multipart")]
async fn register_form(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    MultipartForm(form): MultipartForm<RUserRegisterForm>,
) -> ApiResult<UserRes> {
    let (body, picture) = form.into_parts();
    register_user(&db, body, picture).await
}

async fn register_user(
    db: &PostgresService,
    mut body: RUserRegister,
    picture: Option<TempFile>,
) -> ApiResult<UserRes> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if let Some(file) = picture {
        if let Some(stored) = store_picture(Path::new(&config().assets_dir), file).await? {
            body.picture_path = stored;
        }
    }

    let password_hash = hash_password(&body.password).map_err(|e| {
        error!("Failed hashing password: {}", e);
        AppError::Internal("password hashing failed".into())
    })?;

    let user = db
        .create_user(DBUserCreate {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            password_hash,
            picture_path: body.picture_path,
            location: body.location,
            occupation: body.occupation,
        })
        .await?;

    Ok(ApiResponse::Created(user.into()))
}
