pub mod error;
pub mod post;
pub mod response;
pub mod token;
pub mod user;
