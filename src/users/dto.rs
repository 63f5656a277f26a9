use serde::Serialize;
use uuid::Uuid;

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub clerk_user_id: String,
    pub username: String,
    pub email: Option<String>,
}

impl From<crate::users::repo::User> for PublicUser {
    fn from(u: crate::users::repo::User) -> Self {
        Self {
            id: u.id,
            clerk_user_id: u.clerk_user_id,
            username: u.username,
            email: u.email,
        }
    }
}
