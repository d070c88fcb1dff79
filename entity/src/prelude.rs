pub use super::director::Entity as Director;
pub use super::favorite::Entity as Favorite;
pub use super::film::Entity as Film;
pub use super::gender::Entity as Gender;
pub use super::person::Entity as Person;
pub use super::person_film::Entity as PersonFilm;
pub use super::planet::Entity as Planet;
pub use super::species::Entity as Species;
pub use super::starship::Entity as Starship;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
