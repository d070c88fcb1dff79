use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_create_director_table::Director;

static FK_FILM_DIRECTOR_ID: &str = "fk_film_director_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::Id))
                    .col(string(Film::Title))
                    .col(date_null(Film::ReleaseDate))
                    .col(text_null(Film::OpeningCrawl))
                    .col(integer_null(Film::DirectorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FILM_DIRECTOR_ID)
                            .from(Film::Table, Film::DirectorId)
                            .to(Director::Table, Director::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Film {
    Table,
    Id,
    Title,
    ReleaseDate,
    OpeningCrawl,
    DirectorId,
}
