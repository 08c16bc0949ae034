use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::{DateTime, Utc};
use entity::user::Model as UserModel;
use sea_orm::prelude::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RUserRegister {
    #[validate(length(min = 2, max = 50, message = "First name must be between 2 and 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 50, message = "Last name must be between 2 and 50 characters"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email"), length(max = 50, message = "Email is too long"))]
    pub email: String,
    #[validate(length(min = 5, message = "Password must be at least 5 characters"))]
    pub password: String,
    #[serde(default)]
    pub picture_path: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub occupation: String,
}

/// `multipart/form-data` registration, as sent by a browser form with a
/// `picture` file input.
#[derive(MultipartForm)]
pub struct RUserRegisterForm {
    #[multipart(rename = "firstName")]
    pub first_name: Text<String>,
    #[multipart(rename = "lastName")]
    pub last_name: Text<String>,
    pub email: Text<String>,
    pub password: Text<String>,
    #[multipart(rename = "picturePath")]
    pub picture_path: Option<Text<String>>,
    pub location: Option<Text<String>>,
    pub occupation: Option<Text<String>>,
    pub picture: Option<TempFile>,
}

impl RUserRegisterForm {
    pub fn into_parts(self) -> (RUserRegister, Option<TempFile>) {
        let body = RUserRegister {
            first_name: self.first_name.into_inner(),
            last_name: self.last_name.into_inner(),
            email: self.email.into_inner(),
            password: self.password.into_inner(),
            picture_path: self.picture_path.map(Text::into_inner).unwrap_or_default(),
            location: self.location.map(Text::into_inner).unwrap_or_default(),
            occupation: self.occupation.map(Text::into_inner).unwrap_or_default(),
        };
        (body, self.picture)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

/// Row to insert; `password_hash` is already Argon2'd.
pub struct DBUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub picture_path: String,
    pub location: String,
    pub occupation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRes {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub picture_path: String,
    pub friends: Vec<String>,
    pub location: String,
    pub occupation: String,
    pub viewed_profile: i32,
    pub impressions: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserModel> for UserRes {
    fn from(u: UserModel) -> Self {
        Self {
            id: u.id,
            friends: friend_ids(&u.friends),
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            picture_path: u.picture_path,
            location: u.location,
            occupation: u.occupation,
            viewed_profile: u.viewed_profile,
            impressions: u.impressions,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// The reduced projection the friend list endpoints hand out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendRes {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
    pub location: String,
    pub picture_path: String,
}

impl From<UserModel> for FriendRes {
    fn from(u: UserModel) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            occupation: u.occupation,
            location: u.location,
            picture_path: u.picture_path,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub token: String,
    pub user: UserRes,
}

/// Friend ids stored on a user row. Anything that isn't a string is dropped.
pub fn friend_ids(friends: &Json) -> Vec<String> {
    friends
        .as_array()
        .map(|ids| {
            ids.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_model() -> UserModel {
        let now = Utc::now();
        UserModel {
            id: Uuid::new_v4(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
            picture_path: "ada.png".into(),
            friends: json!(["a", "b"]),
            location: "London".into(),
            occupation: "Mathematician".into(),
            viewed_profile: 12,
            impressions: 34,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn user_response_uses_wire_names_and_hides_password() {
        let model = sample_model();
        let id = model.id;
        let body = serde_json::to_value(UserRes::from(model)).unwrap();

        assert_eq!(body["_id"], json!(id.to_string()));
        assert_eq!(body["firstName"], "Ada");
        assert_eq!(body["picturePath"], "ada.png");
        assert_eq!(body["viewedProfile"], 12);
        assert_eq!(body["friends"], json!(["a", "b"]));
        assert!(body.get("password").is_none());
    }

    #[test]
    fn entity_model_never_serializes_password() {
        let body = serde_json::to_value(sample_model()).unwrap();
        assert!(body.get("password").is_none());
    }

    #[test]
    fn friend_projection_only_carries_public_fields() {
        let body = serde_json::to_value(FriendRes::from(sample_model())).unwrap();
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 6);
        assert!(body.get("email").is_none());
        assert_eq!(body["occupation"], "Mathematician");
    }

    #[test]
    fn friend_ids_tolerates_junk() {
        assert_eq!(friend_ids(&json!(["x", 3, null, "y"])), vec!["x", "y"]);
        assert!(friend_ids(&json!({"not": "an array"})).is_empty());
    }

    #[test]
    fn register_validation() {
        let ok = RUserRegister {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "hunter22".into(),
            picture_path: String::new(),
            location: String::new(),
            occupation: String::new(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RUserRegister { email: "not-an-email".into(), ..ok.clone() };
        assert!(bad_email.validate().is_err());

        let short_password = RUserRegister { password: "abc".into(), ..ok.clone() };
        assert!(short_password.validate().is_err());

        let short_name = RUserRegister { first_name: "A".into(), ..ok };
        assert!(short_name.validate().is_err());
    }
}
