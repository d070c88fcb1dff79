//! Favorite targets and the messages tied to them.

use sea_orm::{ColumnTrait, Condition};

/// The catalog row a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    /// Planet by ID
    Planet(i32),
    /// Person by ID
    Person(i32),
}

impl FavoriteTarget {
    /// Noun used in confirmation and error messages, e.g. "Favorite planet added successfully"
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planet(_) => "planet",
            Self::Person(_) => "people",
        }
    }

    /// Error message when the targeted catalog row does not exist
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Self::Planet(_) => "Planet not found",
            Self::Person(_) => "Person not found",
        }
    }

    /// Error message when the user has no such favorite
    pub fn favorite_not_found_message(&self) -> &'static str {
        match self {
            Self::Planet(_) => "Favorite planet not found",
            Self::Person(_) => "Favorite people not found",
        }
    }

    /// Condition matching favorite rows of `user_id` for this target
    pub fn condition(&self, user_id: i32) -> Condition {
        let condition = Condition::all().add(entity::favorite::Column::UserId.eq(user_id));

        match *self {
            Self::Planet(planet_id) => {
                condition.add(entity::favorite::Column::PlanetId.eq(planet_id))
            }
            Self::Person(people_id) => {
                condition.add(entity::favorite::Column::PeopleId.eq(people_id))
            }
        }
    }
}
