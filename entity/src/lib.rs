//! SeaORM entities for the Holonet catalog and favorites schema.

pub mod prelude;

pub mod director;
pub mod favorite;
pub mod film;
pub mod gender;
pub mod person;
pub mod person_film;
pub mod planet;
pub mod species;
pub mod starship;
pub mod user;
pub mod vehicle;
