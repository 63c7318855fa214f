use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    /// Opaque user identifier; issued by the identity provider for
    /// authenticated users, generated server-side for guests.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub is_guest: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::consumption_entry::Entity")]
    ConsumptionEntry,
    #[sea_orm(has_many = "super::daily_limit::Entity")]
    DailyLimit,
    #[sea_orm(has_many = "super::user_favorite::Entity")]
    UserFavorite,
}

impl Related<super::consumption_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsumptionEntry.def()
    }
}

impl Related<super::daily_limit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyLimit.def()
    }
}

impl Related<super::user_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
