use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Must stay in sync with the search query in the service's item repository.
const CREATE_SEARCH_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_items_search ON items USING GIN (
    to_tsvector('simple', id || ' ' || name || ' ' || category || ' ' || details || ' ' || location)
)
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Items::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Items::Name).string().not_null())
                    .col(ColumnDef::new(Items::Category).string().not_null())
                    .col(
                        ColumnDef::new(Items::PictureUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Items::Details).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Items::Location)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Items::LastPerformedBy)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Items::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(Items::Status)
                            .string_len(16)
                            .not_null()
                            .default("checked_in"),
                    )
                    .col(
                        ColumnDef::new(Items::Deleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Items::Table, Items::LastPerformedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_SEARCH_INDEX)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    Name,
    Category,
    PictureUrl,
    Details,
    Location,
    LastPerformedBy,
    Quantity,
    Status,
    Deleted,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
