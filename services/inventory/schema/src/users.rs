use sea_orm::entity::prelude::*;

/// Account record. Row `id = 0` is the seeded system account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub token: String,
    pub is_admin: bool,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_logs::Entity")]
    ItemLogs,
}

impl Related<super::item_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
