use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_gender_table::Gender,
    m20251101_000002_create_species_table::Species,
    m20251101_000003_create_vehicle_table::Vehicle,
};

static FK_PEOPLE_GENDER_ID: &str = "fk_people_gender_id";
static FK_PEOPLE_SPECIES_ID: &str = "fk_people_species_id";
static FK_PEOPLE_VEHICLE_ID: &str = "fk_people_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string(People::Name))
                    .col(integer_null(People::Height))
                    .col(integer_null(People::GenderId))
                    .col(integer_null(People::SpeciesId))
                    .col(integer_null(People::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_GENDER_ID)
                            .from(People::Table, People::GenderId)
                            .to(Gender::Table, Gender::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_SPECIES_ID)
                            .from(People::Table, People::SpeciesId)
                            .to(Species::Table, Species::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_VEHICLE_ID)
                            .from(People::Table, People::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Name,
    Height,
    GenderId,
    SpeciesId,
    VehicleId,
}
