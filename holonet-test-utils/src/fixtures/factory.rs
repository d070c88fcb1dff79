//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating catalog and user models with standard test values.
//! These are in-memory model instances that don't require database interaction, suitable for
//! unit tests of DTO mappings.

use chrono::NaiveDate;

/// Create a mock user model; the email is derived from `username`.
pub fn mock_user_model(id: i32, username: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        name: username.to_string(),
        username: username.to_string(),
        lastname: "Skywalker".to_string(),
        email: format!("{}@holonet.test", username),
        password: "password".to_string(),
        subscription: false,
    }
}

/// Create a mock person model with no gender, species or vehicle.
pub fn mock_person_model(id: i32, name: &str) -> entity::person::Model {
    entity::person::Model {
        id,
        name: name.to_string(),
        height: Some(172),
        gender_id: None,
        species_id: None,
        vehicle_id: None,
    }
}

pub fn mock_gender_model(id: i32, label: &str) -> entity::gender::Model {
    entity::gender::Model {
        id,
        gender_type: label.to_string(),
    }
}

pub fn mock_species_model(id: i32, language: Option<&str>) -> entity::species::Model {
    entity::species::Model {
        id,
        language: language.map(str::to_string),
        classification: Some("mammal".to_string()),
    }
}

pub fn mock_starship_model(id: i32, name: &str) -> entity::starship::Model {
    entity::starship::Model {
        id,
        name: name.to_string(),
        model: Some("YT-1300 light freighter".to_string()),
        manufacturer: Some("Corellian Engineering Corporation".to_string()),
        starship_class: Some("light freighter".to_string()),
        crew: Some(4),
        passengers: Some(6),
    }
}

pub fn mock_vehicle_model(id: i32, name: &str) -> entity::vehicle::Model {
    entity::vehicle::Model {
        id,
        name: name.to_string(),
        model: Some("T-47 airspeeder".to_string()),
        manufacturer: Some("Incom Corporation".to_string()),
        vehicle_class: Some("airspeeder".to_string()),
        crew: Some(2),
        passengers: Some(0),
    }
}

/// Create a mock film model released 1977-05-25 with no director.
pub fn mock_film_model(id: i32, title: &str) -> entity::film::Model {
    entity::film::Model {
        id,
        title: title.to_string(),
        release_date: NaiveDate::from_ymd_opt(1977, 5, 25),
        opening_crawl: Some("It is a period of civil war.".to_string()),
        director_id: None,
    }
}

pub fn mock_director_model(id: i32, name: &str) -> entity::director::Model {
    entity::director::Model {
        id,
        name: name.to_string(),
    }
}
