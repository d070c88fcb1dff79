//! Read-only catalog service.
//!
//! Every operation returns public DTOs; lookups by ID return `None` for a missing row and leave
//! the choice of status code to the controller.

use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait};

use crate::{
    model::catalog::{
        DirectorDto, FilmDto, GenderDto, PersonDto, PlanetDto, SpeciesDto, StarshipDto,
        VehicleDto,
    },
    server::{
        data::catalog::{film::FilmRepository, person::PersonRepository, CatalogRepository},
        error::Error,
    },
};

/// Service for reading the catalog entities.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every person with gender, species, vehicle and films flattened.
    pub async fn get_people(&self) -> Result<Vec<PersonDto>, Error> {
        let records = PersonRepository::new(self.db).get_all().await?;

        Ok(records.into_iter().map(PersonDto::from).collect())
    }

    /// Retrieves a single person, `Ok(None)` if not found.
    pub async fn get_person(&self, person_id: i32) -> Result<Option<PersonDto>, Error> {
        let record = PersonRepository::new(self.db).get_by_id(person_id).await?;

        Ok(record.map(PersonDto::from))
    }

    /// Retrieves every planet ordered by ID.
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        self.list::<entity::prelude::Planet, _>().await
    }

    /// Retrieves a single planet, `Ok(None)` if not found.
    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        self.get::<entity::prelude::Planet, _>(planet_id).await
    }

    /// Retrieves every film with its director flattened to a name.
    pub async fn get_films(&self) -> Result<Vec<FilmDto>, Error> {
        let records = FilmRepository::new(self.db).get_all().await?;

        Ok(records.into_iter().map(FilmDto::from).collect())
    }

    /// Retrieves a single film, `Ok(None)` if not found.
    pub async fn get_film(&self, film_id: i32) -> Result<Option<FilmDto>, Error> {
        let record = FilmRepository::new(self.db).get_by_id(film_id).await?;

        Ok(record.map(FilmDto::from))
    }

    /// Retrieves every starship ordered by ID.
    pub async fn get_starships(&self) -> Result<Vec<StarshipDto>, Error> {
        self.list::<entity::prelude::Starship, _>().await
    }

    /// Retrieves a single starship, `Ok(None)` if not found.
    pub async fn get_starship(&self, starship_id: i32) -> Result<Option<StarshipDto>, Error> {
        self.get::<entity::prelude::Starship, _>(starship_id).await
    }

    /// Retrieves every vehicle ordered by ID.
    pub async fn get_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        self.list::<entity::prelude::Vehicle, _>().await
    }

    /// Retrieves a single vehicle, `Ok(None)` if not found.
    pub async fn get_vehicle(&self, vehicle_id: i32) -> Result<Option<VehicleDto>, Error> {
        self.get::<entity::prelude::Vehicle, _>(vehicle_id).await
    }

    /// Retrieves every gender ordered by ID.
    pub async fn get_genders(&self) -> Result<Vec<GenderDto>, Error> {
        self.list::<entity::prelude::Gender, _>().await
    }

    /// Retrieves a single gender, `Ok(None)` if not found.
    pub async fn get_gender(&self, gender_id: i32) -> Result<Option<GenderDto>, Error> {
        self.get::<entity::prelude::Gender, _>(gender_id).await
    }

    /// Retrieves every species ordered by ID.
    pub async fn get_species_list(&self) -> Result<Vec<SpeciesDto>, Error> {
        self.list::<entity::prelude::Species, _>().await
    }

    /// Retrieves a single species, `Ok(None)` if not found.
    pub async fn get_species(&self, species_id: i32) -> Result<Option<SpeciesDto>, Error> {
        self.get::<entity::prelude::Species, _>(species_id).await
    }

    /// Retrieves every director ordered by ID.
    pub async fn get_directors(&self) -> Result<Vec<DirectorDto>, Error> {
        self.list::<entity::prelude::Director, _>().await
    }

    /// Retrieves a single director, `Ok(None)` if not found.
    pub async fn get_director(&self, director_id: i32) -> Result<Option<DirectorDto>, Error> {
        self.get::<entity::prelude::Director, _>(director_id).await
    }

    async fn list<E, D>(&self) -> Result<Vec<D>, Error>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
        D: From<E::Model>,
    {
        let rows = CatalogRepository::<_, E>::new(self.db).get_all().await?;

        Ok(rows.into_iter().map(D::from).collect())
    }

    async fn get<E, D>(&self, id: i32) -> Result<Option<D>, Error>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
        D: From<E::Model>,
    {
        let row = CatalogRepository::<_, E>::new(self.db).get_by_id(id).await?;

        Ok(row.map(D::from))
    }
}
