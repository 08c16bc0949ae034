use crate::config::config;
use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_files::Files;
use actix_multipart::{form::MultipartFormConfig, MultipartError};
use actix_web::{
    error::{JsonPayloadError, PathError},
    web, HttpRequest,
};
use actix_web_httpauth::middleware::HttpAuthentication;
use tracing::warn;

pub mod auth;
pub mod health;
pub mod posts;
pub mod users;

const UPLOAD_LIMIT: usize = 30 * 1024 * 1024;

// extractor failures get the same JSON error body as handler errors

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn path_error(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::NotFound("Not found".to_string()).into()
}

fn multipart_error(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let jwt_auth = HttpAuthentication::with_fn(validate_token);

    cfg.app_data(web::JsonConfig::default().limit(UPLOAD_LIMIT).error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(
            MultipartFormConfig::default()
                .total_limit(UPLOAD_LIMIT)
                .error_handler(multipart_error),
        );

    cfg.service(web::scope("/health").service(health::health));
    // Files falls back to the working directory when its root is missing
    match std::fs::create_dir_all(&config().assets_dir) {
        Ok(()) => {
            cfg.service(Files::new("/assets", &config().assets_dir));
        }
        Err(e) => warn!("Not serving /assets from {}: {}", config().assets_dir, e),
    }
    cfg.service(
        web::scope("/auth")
            .service(auth::login::login)
            .service(auth::register::register_form)
            .service(auth::register::register),
    );
    cfg.service(
        web::scope("/users")
            .service(users::friends::get_user_friends)
            .service(users::get::get_user)
            .service(users::toggle_friend::toggle_friend)
            .wrap(jwt_auth.clone()),
    );
    cfg.service(
        web::scope("/posts")
            .service(posts::feed::feed)
            .service(posts::create::create_post_form)
            .service(posts::create::create_post)
            .service(posts::user_posts::user_posts)
            .service(posts::like::like_post)
            .wrap(jwt_auth),
    );
}
