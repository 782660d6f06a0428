use sea_orm::entity::prelude::*;

/// Inventory item keyed by its externally supplied id (usually a barcode).
///
/// `status` holds `checked_in` or `checked_out`. `deleted` is a tombstone; deleted
/// rows stay in the table and are revived when the same id is added again.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub picture_url: String,
    pub details: String,
    pub location: String,
    pub last_performed_by: i32,
    pub quantity: i32,
    pub status: String,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::LastPerformedBy",
        to = "super::users::Column::Id"
    )]
    LastPerformedBy,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LastPerformedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
