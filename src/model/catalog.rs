use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::{
    catalog::{FilmRecord, PersonRecord},
    db::{DirectorModel, GenderModel, PlanetModel, SpeciesModel, StarshipModel, VehicleModel},
};

/// A character, with related rows flattened to their display values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    /// Gender type label, null when the person has no gender
    pub gender: Option<String>,
    /// Language of the person's species, null when unknown
    pub species: Option<String>,
    /// Name of the vehicle the person pilots, null when none
    pub vehicle: Option<String>,
    /// Titles of the films the person appears in
    pub films: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub population: Option<i64>,
    pub terrain: Option<String>,
    pub diameter: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilmDto {
    pub id: i32,
    pub title: String,
    /// Director name, null when the film has no director
    pub director: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub opening_crawl: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub starship_class: Option<String>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub vehicle_class: Option<String>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenderDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub gender_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpeciesDto {
    pub id: i32,
    pub language: Option<String>,
    pub classification: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DirectorDto {
    pub id: i32,
    pub name: String,
}

impl From<PersonRecord> for PersonDto {
    fn from(record: PersonRecord) -> Self {
        Self {
            id: record.person.id,
            name: record.person.name,
            height: record.person.height,
            gender: record.gender.map(|g| g.gender_type),
            species: record.species.and_then(|s| s.language),
            vehicle: record.vehicle.map(|v| v.name),
            films: record.films.into_iter().map(|f| f.title).collect(),
        }
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            terrain: planet.terrain,
            diameter: planet.diameter,
        }
    }
}

impl From<FilmRecord> for FilmDto {
    fn from(record: FilmRecord) -> Self {
        Self {
            id: record.film.id,
            title: record.film.title,
            director: record.director.map(|d| d.name),
            release_date: record.film.release_date,
            opening_crawl: record.film.opening_crawl,
        }
    }
}

impl From<StarshipModel> for StarshipDto {
    fn from(starship: StarshipModel) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
            model: starship.model,
            manufacturer: starship.manufacturer,
            starship_class: starship.starship_class,
            crew: starship.crew,
            passengers: starship.passengers,
        }
    }
}

impl From<VehicleModel> for VehicleDto {
    fn from(vehicle: VehicleModel) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            manufacturer: vehicle.manufacturer,
            vehicle_class: vehicle.vehicle_class,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
        }
    }
}

impl From<GenderModel> for GenderDto {
    fn from(gender: GenderModel) -> Self {
        Self {
            id: gender.id,
            gender_type: gender.gender_type,
        }
    }
}

impl From<SpeciesModel> for SpeciesDto {
    fn from(species: SpeciesModel) -> Self {
        Self {
            id: species.id,
            language: species.language,
            classification: species.classification,
        }
    }
}

impl From<DirectorModel> for DirectorDto {
    fn from(director: DirectorModel) -> Self {
        Self {
            id: director.id,
            name: director.name,
        }
    }
}
