pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_gender_table;
mod m20251101_000002_create_species_table;
mod m20251101_000003_create_vehicle_table;
mod m20251101_000004_create_director_table;
mod m20251101_000005_create_planet_table;
mod m20251101_000006_create_starship_table;
mod m20251101_000007_create_film_table;
mod m20251101_000008_create_people_table;
mod m20251101_000009_create_people_film_table;
mod m20251101_000010_create_user_table;
mod m20251101_000011_create_favorite_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_gender_table::Migration),
            Box::new(m20251101_000002_create_species_table::Migration),
            Box::new(m20251101_000003_create_vehicle_table::Migration),
            Box::new(m20251101_000004_create_director_table::Migration),
            Box::new(m20251101_000005_create_planet_table::Migration),
            Box::new(m20251101_000006_create_starship_table::Migration),
            Box::new(m20251101_000007_create_film_table::Migration),
            Box::new(m20251101_000008_create_people_table::Migration),
            Box::new(m20251101_000009_create_people_film_table::Migration),
            Box::new(m20251101_000010_create_user_table::Migration),
            Box::new(m20251101_000011_create_favorite_table::Migration),
        ]
    }
}
