pub mod friends;
pub mod get;
pub mod toggle_friend;
