use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::{DateTime, Utc};
use entity::post::Model as PostModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RPostCreate {
    pub user_id: Uuid,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture_path: String,
}

#[derive(MultipartForm)]
pub struct RPostCreateForm {
    #[multipart(rename = "userId")]
    pub user_id: Text<Uuid>,
    pub description: Option<Text<String>>,
    #[multipart(rename = "picturePath")]
    pub picture_path: Option<Text<String>>,
    pub picture: Option<TempFile>,
}

impl RPostCreateForm {
    pub fn into_parts(self) -> (RPostCreate, Option<TempFile>) {
        let body = RPostCreate {
            user_id: self.user_id.into_inner(),
            description: self.description.map(Text::into_inner).unwrap_or_default(),
            picture_path: self.picture_path.map(Text::into_inner).unwrap_or_default(),
        };
        (body, self.picture)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RPostLike {
    pub user_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostRes {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub description: String,
    pub picture_path: String,
    pub user_picture_path: String,
    pub likes: BTreeMap<String, bool>,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostModel> for PostRes {
    fn from(p: PostModel) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            likes: serde_json::from_value(p.likes).unwrap_or_default(),
            comments: serde_json::from_value(p.comments).unwrap_or_default(),
            first_name: p.first_name,
            last_name: p.last_name,
            location: p.location,
            description: p.description,
            picture_path: p.picture_path,
            user_picture_path: p.user_picture_path,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

pub fn to_post_list(posts: Vec<PostModel>) -> Vec<PostRes> {
    posts.into_iter().map(PostRes::from).collect()
}
