use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RUserLogin};
use crate::utils::token::{issue_jwt, verify_password};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::{error, info};

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserLogin>,
) -> ApiResult<LoginRes> {
    let user = match db.get_user_by_email(&body.email).await {
        Ok(u) => u,
        Err(AppError::NotFound(_)) => {
            return Err(AppError::BadRequest("User does not exist.".into()))
        }
        Err(e) => return Err(e),
    };

    let matches = verify_password(&body.password, &user.password).map_err(|e| {
        error!("Stored password hash for {} is unreadable: {}", user.id, e);
        AppError::Internal("password verification failed".into())
    })?;
    if !matches {
        return Err(AppError::BadRequest("Invalid credentials.".into()));
    }

    let token = issue_jwt(&config().jwt, user.id).map_err(|e| {
        error!("Failed signing token: {}", e);
        AppError::Internal("token signing failed".into())
    })?;
    info!("User {} logged in", user.id);

    Ok(ApiResponse::Ok(LoginRes {
        token,
        user: user.into(),
    }))
}
