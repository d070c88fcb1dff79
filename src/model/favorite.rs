use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::db::FavoriteModel;

/// A favorite planet or person of a user. Only one of `planet_id` and `people_id` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

/// Request body of every favorite mutation, naming the acting user
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRequestDto {
    pub user_id: Option<i32>,
}

impl From<FavoriteModel> for FavoriteDto {
    fn from(favorite: FavoriteModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            people_id: favorite.people_id,
        }
    }
}
