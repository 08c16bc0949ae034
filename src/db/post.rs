use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::post::{ActiveModel as PostActive, Column, Entity as Post, Model as PostModel};
use entity::user::Model as UserModel;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use serde_json::{json, Map, Value};
use tracing::info;
use uuid::Uuid;

impl PostgresService {
    /// The whole feed, oldest first.
    pub async fn list_posts(&self) -> Result<Vec<PostModel>, AppError> {
        Ok(Post::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_posts_for_user(&self, user_id: Uuid) -> Result<Vec<PostModel>, AppError> {
        Ok(Post::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_post(&self, id: Uuid) -> Result<PostModel, AppError> {
        Ok(Post::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Post not found".into()))?)
    }

    pub async fn create_post(
        &self,
        author: &UserModel,
        description: String,
        picture_path: String,
    ) -> Result<PostModel, AppError> {
        let now = Utc::now();
        let post = PostActive {
            id: Set(token::new_id()),
            user_id: Set(author.id),
            first_name: Set(author.first_name.clone()),
            last_name: Set(author.last_name.clone()),
            location: Set(author.location.clone()),
            user_picture_path: Set(author.picture_path.clone()),
            description: Set(description),
            picture_path: Set(picture_path),
            likes: Set(json!({})),
            comments: Set(json!([])),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        info!("User {} created post {}", author.id, post.id);
        Ok(post)
    }

    pub async fn toggle_post_like(&self, post_id: Uuid, user_id: Uuid) -> Result<PostModel, AppError> {
        let post = self.get_post(post_id).await?;

        let mut likes = match &post.likes {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        toggle_like(&mut likes, &user_id.to_string());

        let mut am: PostActive = post.into();
        am.likes = Set(Value::Object(likes));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }
}

/// Like if not liked, unlike if liked. Returns whether `user_id` likes the
/// post afterwards. A stored `false` counts as not liked.
pub fn toggle_like(likes: &mut Map<String, Value>, user_id: &str) -> bool {
    let liked = likes.get(user_id).and_then(Value::as_bool).unwrap_or(false);
    if liked {
        likes.remove(user_id);
    } else {
        likes.insert(user_id.to_string(), Value::Bool(true));
    }
    !liked
}
