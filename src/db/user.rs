use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    user::{friend_ids, DBUserCreate},
};
use crate::utils::token;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde_json::json;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create user. Profile counters start out random.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let (viewed_profile, impressions) = {
            let mut rng = rand::thread_rng();
            (rng.gen_range(0..10_000), rng.gen_range(0..10_000))
        };
        let now = Utc::now();

        let user = UserActive {
            id: Set(token::new_id()),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            email: Set(payload.email),
            password: Set(payload.password_hash),
            picture_path: Set(payload.picture_path),
            friends: Set(json!([])),
            location: Set(payload.location),
            occupation: Set(payload.occupation),
            viewed_profile: Set(viewed_profile),
            impressions: Set(impressions),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Looks up `ids` and returns the users in the same order, repeats included.
    /// Ids that are malformed or point at deleted users are skipped.
    pub async fn get_users_by_ids(&self, ids: &[String]) -> Result<Vec<UserModel>, AppError> {
        let uuids: Vec<Uuid> = ids.iter().filter_map(|id| Uuid::parse_str(id).ok()).collect();
        if uuids.is_empty() {
            return Ok(vec![]);
        }

        let found: HashMap<Uuid, UserModel> = User::find()
            .filter(entity::user::Column::Id.is_in(uuids.clone()))
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(uuids.iter().filter_map(|id| found.get(id).cloned()).collect())
    }

    pub async fn list_friends(&self, user_id: &Uuid) -> Result<Vec<UserModel>, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        self.get_users_by_ids(&friend_ids(&user.friends)).await
    }

    /// Adds or removes the friendship on both rows in one transaction and
    /// returns `user_id`'s friends afterwards.
    pub async fn toggle_friendship(
        &self,
        user_id: Uuid,
        friend_id: Uuid,
    ) -> Result<Vec<UserModel>, AppError> {
        if user_id == friend_id {
            return Err(AppError::BadRequest("Cannot add yourself as a friend.".into()));
        }

        let txn = self.database_connection.begin().await?;

        let user = User::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;
        let friend = User::find_by_id(friend_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Friend does not exist".into()))?;

        let mut user_friends = friend_ids(&user.friends);
        let mut friend_friends = friend_ids(&friend.friends);
        let added = toggle_friend(
            &mut user_friends,
            &mut friend_friends,
            &user_id.to_string(),
            &friend_id.to_string(),
        );

        let now = Utc::now();
        let mut am: UserActive = user.into();
        am.friends = Set(json!(user_friends));
        am.updated_at = Set(now);
        am.update(&txn).await?;

        let mut am: UserActive = friend.into();
        am.friends = Set(json!(friend_friends));
        am.updated_at = Set(now);
        am.update(&txn).await?;

        txn.commit().await?;
        info!(
            "{} friendship {} <-> {}",
            if added { "Added" } else { "Removed" },
            user_id,
            friend_id
        );

        self.get_users_by_ids(&user_friends).await
    }
}

/// Flips the friendship between two users' friend lists. Returns `true` when
/// the pair is now friends.
///
/// Membership is decided by the first user's list; the second list is brought
/// in line with it either way.
pub fn toggle_friend(
    user_friends: &mut Vec<String>,
    friend_friends: &mut Vec<String>,
    user_id: &str,
    friend_id: &str,
) -> bool {
    if user_friends.iter().any(|f| f == friend_id) {
        user_friends.retain(|f| f != friend_id);
        friend_friends.retain(|f| f != user_id);
        false
    } else {
        user_friends.push(friend_id.to_string());
        if !friend_friends.iter().any(|f| f == user_id) {
            friend_friends.push(user_id.to_string());
        }
        true
    }
}
