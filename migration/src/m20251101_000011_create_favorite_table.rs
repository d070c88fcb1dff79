use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000005_create_planet_table::Planet, m20251101_000008_create_people_table::People,
    m20251101_000010_create_user_table::User,
};

static IDX_FAVORITE_USER_ID: &str = "idx_favorite_user_id";
static IDX_FAVORITE_USER_PLANET: &str = "idx_favorite_user_id_planet_id";
static IDX_FAVORITE_USER_PEOPLE: &str = "idx_favorite_user_id_people_id";
static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";
static FK_FAVORITE_PLANET_ID: &str = "fk_favorite_planet_id";
static FK_FAVORITE_PEOPLE_ID: &str = "fk_favorite_people_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::PlanetId))
                    .col(integer_null(Favorite::PeopleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANET_ID)
                            .from(Favorite::Table, Favorite::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PEOPLE_ID)
                            .from(Favorite::Table, Favorite::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .to_owned(),
            )
            .await?;

        // NULLs compare distinct, so planet rows never collide with people rows
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_PLANET)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_PEOPLE)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::PeopleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_FAVORITE_USER_PEOPLE,
            IDX_FAVORITE_USER_PLANET,
            IDX_FAVORITE_USER_ID,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Favorite::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    Id,
    UserId,
    PlanetId,
    PeopleId,
}
