//! Person repository.
//!
//! Loads gender, species, vehicle and film relations in batched `IS IN` queries rather than one
//! query per person.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{
    data::catalog::index_by_id,
    model::{
        catalog::PersonRecord,
        db::{FilmModel, PersonModel},
    },
};

/// Repository for people and their relations.
pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every person ordered by ID, along with their gender, species, vehicle and films
    pub async fn get_all(&self) -> Result<Vec<PersonRecord>, DbErr> {
        let people = entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(people).await
    }

    /// Gets a person with their related rows, returning `None` if the person does not exist
    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<PersonRecord>, DbErr> {
        let Some(person) = entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![person]).await?.pop())
    }

    /// Resolves the relations of `people` with one query per related table
    async fn load_relations(&self, people: Vec<PersonModel>) -> Result<Vec<PersonRecord>, DbErr> {
        if people.is_empty() {
            return Ok(Vec::new());
        }

        let gender_ids: Vec<i32> = people.iter().filter_map(|p| p.gender_id).collect();
        let species_ids: Vec<i32> = people.iter().filter_map(|p| p.species_id).collect();
        let vehicle_ids: Vec<i32> = people.iter().filter_map(|p| p.vehicle_id).collect();
        let people_ids: Vec<i32> = people.iter().map(|p| p.id).collect();

        let genders = index_by_id(
            entity::prelude::Gender::find()
                .filter(entity::gender::Column::Id.is_in(gender_ids))
                .all(self.db)
                .await?,
            |g| g.id,
        );
        let species = index_by_id(
            entity::prelude::Species::find()
                .filter(entity::species::Column::Id.is_in(species_ids))
                .all(self.db)
                .await?,
            |s| s.id,
        );
        let vehicles = index_by_id(
            entity::prelude::Vehicle::find()
                .filter(entity::vehicle::Column::Id.is_in(vehicle_ids))
                .all(self.db)
                .await?,
            |v| v.id,
        );

        let links = entity::prelude::PersonFilm::find()
            .filter(entity::person_film::Column::PeopleId.is_in(people_ids))
            .order_by_asc(entity::person_film::Column::FilmId)
            .all(self.db)
            .await?;
        let film_ids: Vec<i32> = links.iter().map(|l| l.film_id).collect();
        let films = index_by_id(
            entity::prelude::Film::find()
                .filter(entity::film::Column::Id.is_in(film_ids))
                .all(self.db)
                .await?,
            |f| f.id,
        );

        let mut films_by_person: HashMap<i32, Vec<FilmModel>> = HashMap::new();
        for link in links {
            if let Some(film) = films.get(&link.film_id) {
                films_by_person
                    .entry(link.people_id)
                    .or_default()
                    .push(film.clone());
            }
        }

        let records = people
            .into_iter()
            .map(|person| PersonRecord {
                gender: person.gender_id.and_then(|id| genders.get(&id).cloned()),
                species: person.species_id.and_then(|id| species.get(&id).cloned()),
                vehicle: person.vehicle_id.and_then(|id| vehicles.get(&id).cloned()),
                films: films_by_person.remove(&person.id).unwrap_or_default(),
                person,
            })
            .collect();

        Ok(records)
    }
}
