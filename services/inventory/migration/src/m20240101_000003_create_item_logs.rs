use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItemLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ItemLogs::UserId).integer().not_null())
                    .col(ColumnDef::new(ItemLogs::ObjectId).string().not_null())
                    .col(ColumnDef::new(ItemLogs::Action).string_len(16).not_null())
                    .col(
                        ColumnDef::new(ItemLogs::Details)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ItemLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ItemLogs::Table, ItemLogs::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ItemLogs::Table)
                    .col(ItemLogs::ObjectId)
                    .name("idx_item_logs_object_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemLogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ItemLogs {
    Table,
    Id,
    UserId,
    ObjectId,
    Action,
    Details,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
