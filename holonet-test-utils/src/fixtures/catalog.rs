use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { context: self }
    }
}

pub struct CatalogFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                population: ActiveValue::Set(Some(200_000)),
                terrain: ActiveValue::Set(Some("desert".to_string())),
                diameter: ActiveValue::Set(Some(10_465)),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_gender(&self, label: &str) -> Result<entity::gender::Model, TestError> {
        Ok(
            entity::prelude::Gender::insert(entity::gender::ActiveModel {
                gender_type: ActiveValue::Set(label.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_species(
        &self,
        language: &str,
    ) -> Result<entity::species::Model, TestError> {
        Ok(
            entity::prelude::Species::insert(entity::species::ActiveModel {
                language: ActiveValue::Set(Some(language.to_string())),
                classification: ActiveValue::Set(Some("mammal".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_vehicle(&self, name: &str) -> Result<entity::vehicle::Model, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                model: ActiveValue::Set(Some("T-47 airspeeder".to_string())),
                manufacturer: ActiveValue::Set(Some("Incom Corporation".to_string())),
                vehicle_class: ActiveValue::Set(Some("airspeeder".to_string())),
                crew: ActiveValue::Set(Some(2)),
                passengers: ActiveValue::Set(Some(0)),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_starship(
        &self,
        name: &str,
    ) -> Result<entity::starship::Model, TestError> {
        Ok(
            entity::prelude::Starship::insert(entity::starship::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                model: ActiveValue::Set(Some("YT-1300 light freighter".to_string())),
                manufacturer: ActiveValue::Set(Some("Corellian Engineering Corporation".to_string())),
                starship_class: ActiveValue::Set(Some("corvette".to_string())),
                crew: ActiveValue::Set(Some(4)),
                passengers: ActiveValue::Set(Some(6)),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_director(
        &self,
        name: &str,
    ) -> Result<entity::director::Model, TestError> {
        Ok(
            entity::prelude::Director::insert(entity::director::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_film(
        &self,
        title: &str,
        director_id: Option<i32>,
    ) -> Result<entity::film::Model, TestError> {
        Ok(
            entity::prelude::Film::insert(entity::film::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                release_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1977, 5, 25)),
                opening_crawl: ActiveValue::Set(Some("It is a period of civil war.".to_string())),
                director_id: ActiveValue::Set(director_id),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a person, with each relation left null when `None`
    pub async fn insert_person(
        &self,
        name: &str,
        gender_id: Option<i32>,
        species_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Result<entity::person::Model, TestError> {
        Ok(
            entity::prelude::Person::insert(entity::person::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set(Some(172)),
                gender_id: ActiveValue::Set(gender_id),
                species_id: ActiveValue::Set(species_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn link_person_film(
        &self,
        people_id: i32,
        film_id: i32,
    ) -> Result<entity::person_film::Model, TestError> {
        Ok(
            entity::prelude::PersonFilm::insert(entity::person_film::ActiveModel {
                people_id: ActiveValue::Set(people_id),
                film_id: ActiveValue::Set(film_id),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
