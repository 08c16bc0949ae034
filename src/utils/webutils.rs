use std::future::{ready, Ready};

use actix_cors::Cors;
use actix_web::{
    dev::{Payload, ServiceRequest},
    guard::GuardContext,
    http::header,
    FromRequest, HttpMessage, HttpRequest,
};
use tracing::warn;

use crate::config::config;
use crate::types::error::AppError;
use crate::utils::token::decode_jwt;

/// The `Authorization` header as the client sent it, if it sent one at all.
///
/// Extraction never fails, so the guard can tell a missing header apart from
/// one it can't use.
#[derive(Clone)]
pub struct AuthHeader(Option<String>);

impl FromRequest for AuthHeader {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // non-ascii values are kept as "" so they still count as present
        let value = req
            .headers()
            .get(header::AUTHORIZATION)
            .map(|v| v.to_str().unwrap_or_default().to_string());
        ready(Ok(AuthHeader(value)))
    }
}

/// Strips an optional `Bearer ` scheme. A bare token is taken as is.
pub fn token_from_header(value: &str) -> &str {
    value
        .strip_prefix("Bearer ")
        .map(str::trim_start)
        .unwrap_or(value)
}

/// JWT guard for `/users` and `/posts`.
///
/// No `Authorization` header is a 403, a header with an unusable token is a
/// 401. On success the decoded [`Claims`](crate::types::token::Claims) are
/// stashed in the request extensions for handlers to pick up with
/// `web::ReqData<Claims>`.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: AuthHeader,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(value) = credentials.0 else {
        return Err((AppError::Forbidden("Access Denied".to_string()).into(), req));
    };

    match decode_jwt(&config().jwt, token_from_header(&value)) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(e) => {
            warn!("rejected token on {}: {}", req.path(), e);
            Err((AppError::Unauthorized.into(), req))
        }
    }
}

/// Routes `multipart/form-data` bodies to the upload-aware handlers.
pub fn is_multipart(ctx: &GuardContext) -> bool {
    ctx.head()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

/// CORS restricted to `origins`. Requests without an `Origin` header pass
/// through untouched.
pub fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .map(|o| o.trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
