use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { context: self }
    }
}

pub struct FavoriteFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert(user_id, Some(planet_id), None).await
    }

    pub async fn insert_people_favorite(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert(user_id, None, Some(people_id)).await
    }

    async fn insert(
        &self,
        user_id: i32,
        planet_id: Option<i32>,
        people_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                people_id: ActiveValue::Set(people_id),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
