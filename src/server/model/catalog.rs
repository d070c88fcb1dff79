//! Catalog rows loaded together with the related rows their public shape flattens.

use crate::server::model::db::{
    DirectorModel, FilmModel, GenderModel, PersonModel, SpeciesModel, VehicleModel,
};

/// A person with its gender, species, vehicle and films.
///
/// Missing relations are `None` (or an empty list for films); a dangling foreign key is never an
/// error.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonRecord {
    /// The person row
    pub person: PersonModel,
    /// Gender, if set
    pub gender: Option<GenderModel>,
    /// Species, if set
    pub species: Option<SpeciesModel>,
    /// Piloted vehicle, if set
    pub vehicle: Option<VehicleModel>,
    /// Films ordered by film ID
    pub films: Vec<FilmModel>,
}

/// A film with its director.
#[derive(Clone, Debug, PartialEq)]
pub struct FilmRecord {
    /// The film row
    pub film: FilmModel,
    /// Director, if set
    pub director: Option<DirectorModel>,
}
