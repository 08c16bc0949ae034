pub mod create;
pub mod feed;
pub mod like;
pub mod user_posts;
