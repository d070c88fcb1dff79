use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub release_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub opening_crawl: Option<String>,
    pub director_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::director::Entity",
        from = "Column::DirectorId",
        to = "super::director::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Director,
    #[sea_orm(has_many = "super::person_film::Entity")]
    PersonFilm,
}

impl Related<super::director::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Director.def()
    }
}

impl Related<super::person_film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PersonFilm.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        super::person_film::Relation::Person.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::person_film::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
