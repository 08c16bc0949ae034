pub mod post;
pub mod postgres_service;
pub mod user;
