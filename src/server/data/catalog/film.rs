//! Film repository with director lookup.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::catalog::FilmRecord;

/// Repository for films and their directors.
pub struct FilmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FilmRepository<'a, C> {
    /// Creates a new instance of [`FilmRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every film ordered by ID along with its director
    pub async fn get_all(&self) -> Result<Vec<FilmRecord>, DbErr> {
        let films = entity::prelude::Film::find()
            .find_also_related(entity::prelude::Director)
            .order_by_asc(entity::film::Column::Id)
            .all(self.db)
            .await?;

        Ok(films
            .into_iter()
            .map(|(film, director)| FilmRecord { film, director })
            .collect())
    }

    /// Gets a film with its director, returning `None` if the film does not exist
    pub async fn get_by_id(&self, film_id: i32) -> Result<Option<FilmRecord>, DbErr> {
        let film = entity::prelude::Film::find_by_id(film_id)
            .find_also_related(entity::prelude::Director)
            .one(self.db)
            .await?;

        Ok(film.map(|(film, director)| FilmRecord { film, director }))
    }
}
