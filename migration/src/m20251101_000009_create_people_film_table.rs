use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000007_create_film_table::Film, m20251101_000008_create_people_table::People,
};

static IDX_PEOPLE_FILM_FILM_ID: &str = "idx_people_film_film_id";
static FK_PEOPLE_FILM_PEOPLE_ID: &str = "fk_people_film_people_id";
static FK_PEOPLE_FILM_FILM_ID: &str = "fk_people_film_film_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PeopleFilm::Table)
                    .if_not_exists()
                    .col(integer(PeopleFilm::PeopleId))
                    .col(integer(PeopleFilm::FilmId))
                    .primary_key(
                        Index::create()
                            .col(PeopleFilm::PeopleId)
                            .col(PeopleFilm::FilmId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_FILM_PEOPLE_ID)
                            .from(PeopleFilm::Table, PeopleFilm::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_FILM_FILM_ID)
                            .from(PeopleFilm::Table, PeopleFilm::FilmId)
                            .to(Film::Table, Film::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PEOPLE_FILM_FILM_ID)
                    .table(PeopleFilm::Table)
                    .col(PeopleFilm::FilmId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PEOPLE_FILM_FILM_ID)
                    .table(PeopleFilm::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PeopleFilm::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PeopleFilm {
    Table,
    PeopleId,
    FilmId,
}
