use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::db::UserModel;

/// Public view of a user account. The stored password is never exposed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub lastname: String,
    pub email: String,
    pub subscription: bool,
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            lastname: user.lastname,
            email: user.email,
            subscription: user.subscription,
        }
    }
}
