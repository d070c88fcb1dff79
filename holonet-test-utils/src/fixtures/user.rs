use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user; the email is derived from `username` so both stay unique
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(username.to_string()),
                username: ActiveValue::Set(username.to_string()),
                lastname: ActiveValue::Set("Skywalker".to_string()),
                email: ActiveValue::Set(format!("{}@holonet.test", username)),
                password: ActiveValue::Set("password".to_string()),
                subscription: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
