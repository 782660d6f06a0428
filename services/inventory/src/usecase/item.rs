use tracing::{info, warn};

use crate::domain::repository::ItemRepository;
use crate::domain::types::{
    AuditAction, AuditEntry, Item, ItemStatus, MoveDirection, SYSTEM_USER_ID,
};
use crate::error::InventoryServiceError;

/// Append an audit entry. A failed write is logged and otherwise ignored: the
/// mutation it describes has already happened.
async fn record<R: ItemRepository>(repo: &R, entry: AuditEntry) {
    if let Err(e) = repo.append_log(&entry).await {
        warn!(
            error = %e,
            item_id = %entry.object_id,
            action = entry.action.as_str(),
            "failed to append audit log"
        );
    }
}

// ── SearchItems ──────────────────────────────────────────────────────────────

pub struct SearchItemsUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> SearchItemsUseCase<R> {
    pub async fn execute(&self, query: &str) -> Result<Vec<Item>, InventoryServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(InventoryServiceError::missing("q"));
        }
        self.repo.search(query).await
    }
}

// ── AddItem ──────────────────────────────────────────────────────────────────

pub struct AddItemInput {
    pub id: String,
    pub name: String,
    pub category: String,
    pub picture_url: String,
    pub details: String,
    pub location: String,
    pub quantity: i32,
    /// Update an existing item instead of creating one.
    pub overwrite: bool,
    pub performed_by: Option<i32>,
}

impl AddItemInput {
    fn validate(&self) -> Result<(), InventoryServiceError> {
        if self.id.is_empty()
            || self.name.is_empty()
            || self.category.is_empty()
            || self.quantity == 0
        {
            return Err(InventoryServiceError::missing(
                "ID, name, category, quantity must not be blank/0",
            ));
        }
        Ok(())
    }
}

pub struct AddItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> AddItemUseCase<R> {
    pub async fn execute(&self, input: AddItemInput) -> Result<(), InventoryServiceError> {
        input.validate()?;

        let exists = self.repo.exists(&input.id).await?;
        match (exists, input.overwrite) {
            (true, false) => return Err(InventoryServiceError::ItemAlreadyExists),
            (false, true) => return Err(InventoryServiceError::ItemNotFound),
            _ => {}
        }

        let overwrite = input.overwrite;
        let performed_by = input.performed_by;
        let item = Item {
            id: input.id,
            name: input.name,
            category: input.category,
            picture_url: input.picture_url,
            details: input.details,
            location: input.location,
            last_performed_by: performed_by.unwrap_or(SYSTEM_USER_ID),
            quantity: input.quantity,
            status: ItemStatus::CheckedIn,
        };

        // The store re-checks liveness so a concurrent add or delete between the
        // existence check and the write still lands on the right error.
        if overwrite {
            if !self.repo.update(&item).await? {
                return Err(InventoryServiceError::ItemNotFound);
            }
        } else if !self.repo.insert(&item).await? {
            return Err(InventoryServiceError::ItemAlreadyExists);
        }
        info!(item_id = %item.id, overwrite, "item saved");

        if let Some(user_id) = performed_by {
            record(
                &self.repo,
                AuditEntry {
                    user_id,
                    object_id: item.id,
                    action: AuditAction::Add,
                    details: format!("overwrite flag was received as {overwrite}"),
                },
            )
            .await;
        }
        Ok(())
    }
}

// ── MoveItem ─────────────────────────────────────────────────────────────────

pub struct MoveItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> MoveItemUseCase<R> {
    /// Check an item in or out. Moving an item into the state it is already in
    /// succeeds and is audited again.
    pub async fn execute(
        &self,
        id: &str,
        direction: &str,
        actor_id: i32,
    ) -> Result<ItemStatus, InventoryServiceError> {
        let status = MoveDirection::parse(direction)
            .ok_or_else(|| InventoryServiceError::InvalidDirection(direction.to_owned()))?
            .target_status();

        if !self.repo.exists(id).await? {
            return Err(InventoryServiceError::ItemNotFound);
        }
        if !self.repo.set_status(id, status, actor_id).await? {
            return Err(InventoryServiceError::ItemNotFound);
        }
        info!(item_id = %id, user_id = actor_id, status = status.as_str(), "item moved");

        record(
            &self.repo,
            AuditEntry {
                user_id: actor_id,
                object_id: id.to_owned(),
                action: status.into(),
                details: String::new(),
            },
        )
        .await;
        Ok(status)
    }
}

// ── DeleteItem ───────────────────────────────────────────────────────────────

pub struct DeleteItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> DeleteItemUseCase<R> {
    pub async fn execute(&self, id: &str, actor_id: i32) -> Result<(), InventoryServiceError> {
        if self.repo.soft_delete(id, actor_id).await? == 0 {
            return Err(InventoryServiceError::ItemNotFound);
        }
        info!(item_id = %id, user_id = actor_id, "item deleted");

        record(
            &self.repo,
            AuditEntry {
                user_id: actor_id,
                object_id: id.to_owned(),
                action: AuditAction::Delete,
                details: String::new(),
            },
        )
        .await;
        Ok(())
    }
}
