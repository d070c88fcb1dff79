//! Database model type aliases.
//!
//! This module provides convenient type aliases for the SeaORM entity models used throughout the
//! application, so that signatures don't need to reach into the generated `entity` crate.

/// A registered user who can hold favorites.
pub type UserModel = entity::user::Model;

/// A character of the catalog.
///
/// # Fields (from `entity::person::Model`)
/// - `id` - Primary key
/// - `name` - Character name
/// - `height` - Height in centimetres (nullable)
/// - `gender_id` - Foreign key to the gender (nullable)
/// - `species_id` - Foreign key to the species (nullable)
/// - `vehicle_id` - Foreign key to the piloted vehicle (nullable)
pub type PersonModel = entity::person::Model;

/// A planet of the catalog.
pub type PlanetModel = entity::planet::Model;

/// A film of the catalog; linked to people through `entity::person_film`.
pub type FilmModel = entity::film::Model;

/// A starship of the catalog.
pub type StarshipModel = entity::starship::Model;

/// A vehicle of the catalog.
pub type VehicleModel = entity::vehicle::Model;

/// A gender label.
pub type GenderModel = entity::gender::Model;

/// A species with its language and classification.
pub type SpeciesModel = entity::species::Model;

/// A film director.
pub type DirectorModel = entity::director::Model;

/// A user's favorite planet or person.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `planet_id` - Foreign key to the favorite planet, set for planet favorites
/// - `people_id` - Foreign key to the favorite person, set for person favorites
pub type FavoriteModel = entity::favorite::Model;
