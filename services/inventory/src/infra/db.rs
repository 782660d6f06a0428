use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr, Statement,
    sea_query::Expr,
};

use inventory_schema::{item_logs, items, users};

use crate::domain::repository::{ItemRepository, UserRepository};
use crate::domain::types::{AuditEntry, Item, ItemStatus, NewUser, User};
use crate::error::InventoryServiceError;

// ── Item repository ──────────────────────────────────────────────────────────

const SEARCH_SQL: &str = r#"
    SELECT * FROM items
    WHERE deleted = false
      AND (
        to_tsvector('simple', id || ' ' || name || ' ' || category || ' ' || details || ' ' || location)
            @@ plainto_tsquery('simple', $1)
        OR id = $1
      )
    ORDER BY id
"#;

// A live row with the same id makes the conflict branch a no-op, so zero
// affected rows means the id is taken. A deleted row is revived in place.
const INSERT_SQL: &str = r#"
    INSERT INTO items
        (id, name, category, picture_url, details, location, last_performed_by, quantity, status, deleted)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, false)
    ON CONFLICT (id) DO UPDATE SET
        name = EXCLUDED.name,
        category = EXCLUDED.category,
        picture_url = EXCLUDED.picture_url,
        details = EXCLUDED.details,
        location = EXCLUDED.location,
        last_performed_by = EXCLUDED.last_performed_by,
        quantity = EXCLUDED.quantity,
        status = EXCLUDED.status,
        deleted = false
    WHERE items.deleted
"#;

#[derive(Clone)]
pub struct DbItemRepository {
    pub db: DatabaseConnection,
}

impl ItemRepository for DbItemRepository {
    async fn exists(&self, id: &str) -> Result<bool, InventoryServiceError> {
        let count = items::Entity::find()
            .filter(items::Column::Id.eq(id))
            .filter(items::Column::Deleted.eq(false))
            .count(&self.db)
            .await
            .context("count items by id")?;
        Ok(count > 0)
    }

    async fn search(&self, query: &str) -> Result<Vec<Item>, InventoryServiceError> {
        let models = items::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                SEARCH_SQL,
                [query.into()],
            ))
            .all(&self.db)
            .await
            .context("search items")?;
        Ok(models.into_iter().map(item_from_model).collect())
    }

    async fn insert(&self, item: &Item) -> Result<bool, InventoryServiceError> {
        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                INSERT_SQL,
                [
                    item.id.clone().into(),
                    item.name.clone().into(),
                    item.category.clone().into(),
                    item.picture_url.clone().into(),
                    item.details.clone().into(),
                    item.location.clone().into(),
                    item.last_performed_by.into(),
                    item.quantity.into(),
                    item.status.as_str().into(),
                ],
            ))
            .await
            .context("insert item")?;
        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, item: &Item) -> Result<bool, InventoryServiceError> {
        let result = items::Entity::update_many()
            .col_expr(items::Column::Name, Expr::value(item.name.clone()))
            .col_expr(items::Column::Category, Expr::value(item.category.clone()))
            .col_expr(items::Column::PictureUrl, Expr::value(item.picture_url.clone()))
            .col_expr(items::Column::Details, Expr::value(item.details.clone()))
            .col_expr(items::Column::Location, Expr::value(item.location.clone()))
            .col_expr(items::Column::Quantity, Expr::value(item.quantity))
            .col_expr(
                items::Column::LastPerformedBy,
                Expr::value(item.last_performed_by),
            )
            .filter(items::Column::Id.eq(item.id.as_str()))
            .filter(items::Column::Deleted.eq(false))
            .exec(&self.db)
            .await
            .context("update item")?;
        Ok(result.rows_affected > 0)
    }

    async fn set_status(
        &self,
        id: &str,
        status: ItemStatus,
        actor_id: i32,
    ) -> Result<bool, InventoryServiceError> {
        let result = items::Entity::update_many()
            .col_expr(items::Column::Status, Expr::value(status.as_str()))
            .col_expr(items::Column::LastPerformedBy, Expr::value(actor_id))
            .filter(items::Column::Id.eq(id))
            .filter(items::Column::Deleted.eq(false))
            .exec(&self.db)
            .await
            .context("set item status")?;
        Ok(result.rows_affected > 0)
    }

    async fn soft_delete(&self, id: &str, actor_id: i32) -> Result<u64, InventoryServiceError> {
        let result = items::Entity::update_many()
            .col_expr(items::Column::Deleted, Expr::value(true))
            .col_expr(items::Column::LastPerformedBy, Expr::value(actor_id))
            .filter(items::Column::Id.eq(id))
            .filter(items::Column::Deleted.eq(false))
            .exec(&self.db)
            .await
            .context("soft delete item")?;
        Ok(result.rows_affected)
    }

    async fn append_log(&self, entry: &AuditEntry) -> Result<(), InventoryServiceError> {
        item_logs::ActiveModel {
            user_id: Set(entry.user_id),
            object_id: Set(entry.object_id.clone()),
            action: Set(entry.action.as_str().to_owned()),
            details: Set(entry.details.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("append item log")?;
        Ok(())
    }
}

fn item_from_model(model: items::Model) -> Item {
    let status = ItemStatus::parse(&model.status).unwrap_or_else(|| {
        tracing::warn!(item_id = %model.id, status = %model.status, "unknown stored item status");
        ItemStatus::CheckedIn
    });
    Item {
        id: model.id,
        name: model.name,
        category: model.category,
        picture_url: model.picture_url,
        details: model.details,
        location: model.location,
        last_performed_by: model.last_performed_by,
        quantity: model.quantity,
        status,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, InventoryServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .filter(users::Column::Active.eq(true))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, InventoryServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Token.eq(token))
            .filter(users::Column::Active.eq(true))
            .one(&self.db)
            .await
            .context("find user by token")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<(), InventoryServiceError> {
        let result = users::ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            token: Set(user.token.clone()),
            is_admin: Set(user.is_admin),
            active: Set(true),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(InventoryServiceError::UserAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn update_password(
        &self,
        id: i32,
        password_hash: &str,
    ) -> Result<(), InventoryServiceError> {
        users::Entity::update_many()
            .col_expr(users::Column::PasswordHash, Expr::value(password_hash))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update user password")?;
        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<u64, InventoryServiceError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::Active, Expr::value(false))
            .filter(users::Column::Id.eq(id))
            .filter(users::Column::Active.eq(true))
            .exec(&self.db)
            .await
            .context("deactivate user")?;
        Ok(result.rows_affected)
    }

    async fn list_active(&self) -> Result<Vec<User>, InventoryServiceError> {
        let models = users::Entity::find()
            .filter(users::Column::Active.eq(true))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list active users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        token: model.token,
        is_admin: model.is_admin,
        active: model.active,
    }
}
