use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload. `id` is the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(id: Uuid, expires_in: Duration) -> Self {
        let now = Utc::now();
        Self {
            id,
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }
}
