use actix_web::{web, App};
use social_server::{
    config::config,
    db::postgres_service::PostgresService,
    types::{error::AppError, user::DBUserCreate},
    utils::token::{hash_password, issue_jwt},
};
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "password123";

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(social_server::routes::configure_routes)
    }

    /// Inserts a user straight into the database and hands back its id and a
    /// valid bearer token.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> Result<(Uuid, String), AppError> {
        let random_id = Uuid::new_v4();
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", &random_id.to_string()[..8]));

        let user = self.db.create_user(DBUserCreate {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email,
            password_hash: hash_password(TEST_PASSWORD).expect("Failed to hash password"),
            picture_path: "test.png".to_string(),
            location: "Testville".to_string(),
            occupation: "Tester".to_string(),
        }).await?;

        let token = issue_jwt(&config().jwt, user.id).expect("Failed to sign token");

        Ok((user.id, token))
    }
}
