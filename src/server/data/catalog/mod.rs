//! Read-only repositories for the catalog entities.
//!
//! Entities returned without related rows (planets, starships, vehicles, genders, species,
//! directors) share the generic [`CatalogRepository`]; people and films, whose public shape
//! flattens related rows, have dedicated repositories which load those rows alongside.

pub mod film;
pub mod person;

use std::{collections::HashMap, marker::PhantomData};

use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryOrder,
};

/// Read-only access to a catalog table keyed by an integer ID.
pub struct CatalogRepository<'a, C: ConnectionTrait, E: EntityTrait> {
    db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> CatalogRepository<'a, C, E>
where
    C: ConnectionTrait,
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    /// Creates a new instance of [`CatalogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Gets every row of the table ordered by primary key
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        query.all(self.db).await
    }

    /// Gets a row by its ID, returning `None` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }
}

/// Index loaded rows by their ID so relations can be resolved without further queries
pub(crate) fn index_by_id<M>(models: Vec<M>, id: impl Fn(&M) -> i32) -> HashMap<i32, M> {
    models.into_iter().map(|m| (id(&m), m)).collect()
}
