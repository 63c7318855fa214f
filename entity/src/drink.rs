use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drink")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Caffeine content in milligrams for one base serving.
    pub caffeine_mg: i32,
    pub base_size_ml: i32,
    /// Owning user for custom drinks; `None` for global/seed drinks.
    pub created_by_user_id: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedByUserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::consumption_entry::Entity")]
    ConsumptionEntry,
    #[sea_orm(has_many = "super::user_favorite::Entity")]
    UserFavorite,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::consumption_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsumptionEntry.def()
    }
}

impl Related<super::user_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
