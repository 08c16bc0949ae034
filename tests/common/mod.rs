use social_server::config::{EnvConfig, JwtConfig, CONFIG};
use social_server::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::{runners::AsyncRunner, ContainerAsync};

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        CONFIG.get_or_init(get_test_config);

        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 6001,
        db_url: "test".to_string(), // Not used in tests
        jwt: JwtConfig {
            secret: "integration_test_secret".to_string(),
            ttl_seconds: 3600,
        },
        assets_dir: std::env::temp_dir()
            .join("social_server_flow_assets")
            .to_string_lossy()
            .into_owned(),
        cors_origins: vec!["http://localhost:3000".to_string()],
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use social_server::types::user::RUserRegister;

    pub fn sample_user() -> RUserRegister {
        sample_user_with_email("test@example.com")
    }

    pub fn sample_user_with_email(email: &str) -> RUserRegister {
        RUserRegister {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            picture_path: "test.png".to_string(),
            location: "Testville".to_string(),
            occupation: "Tester".to_string(),
        }
    }
}
