use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt: JwtConfig,
    /// Where uploaded pictures land; also served under `/assets`.
    pub assets_dir: String,
    pub cors_origins: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("DATABASE_URL");
        let secret: String = Self::get_env("JWT_SECRET");

        EnvConfig {
            port: Self::get_env_or("PORT", "6001").parse().unwrap_or(6001),
            db_url,
            jwt: JwtConfig {
                secret,
                ttl_seconds: Self::get_env_or("JWT_TTL_SECONDS", "3600").parse().unwrap_or(3600),
            },
            assets_dir: Self::get_env_or("ASSETS_DIR", "public/assets"),
            cors_origins: Self::get_env_or("CORS_ORIGINS", "http://localhost:3000")
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

/// Process-wide config. `main` (or a test harness) must populate [`CONFIG`] first.
pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}

#[cfg(test)]
pub(crate) fn test_config() -> &'static EnvConfig {
    CONFIG.get_or_init(|| EnvConfig {
        port: 6001,
        db_url: "test".to_string(), // mock database in unit tests
        jwt: JwtConfig {
            secret: "unit_test_secret".to_string(),
            ttl_seconds: 3600,
        },
        assets_dir: env::temp_dir()
            .join("social_server_unit_assets")
            .to_string_lossy()
            .into_owned(),
        cors_origins: vec!["http://localhost:3000".to_string()],
    })
}
