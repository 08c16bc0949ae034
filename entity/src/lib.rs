pub mod user;
pub mod post;

/*
 Users hold their friend list as a json array of ids. Friendship is symmetric, so both
 users' arrays get touched on every toggle. Nothing in the schema enforces that.
 Posts copy the author's name/location/picture when created and never refresh them.
 Likes are a json object keyed by user id.
 */
