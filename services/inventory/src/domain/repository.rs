#![allow(async_fn_in_trait)]

use crate::domain::types::{AuditEntry, BarcodeProduct, Item, ItemStatus, NewUser, User};
use crate::error::InventoryServiceError;

/// Repository for inventory items and their audit log.
///
/// Every read and write ignores deleted rows.
pub trait ItemRepository: Send + Sync {
    async fn exists(&self, id: &str) -> Result<bool, InventoryServiceError>;

    /// Full-text match over id/name/category/details/location, or exact id match.
    async fn search(&self, query: &str) -> Result<Vec<Item>, InventoryServiceError>;

    /// Insert a new item, reviving a deleted row with the same id.
    /// Returns `false` if a live item already holds the id.
    async fn insert(&self, item: &Item) -> Result<bool, InventoryServiceError>;

    /// Overwrite every field except `status`. Returns `false` if no live item matched.
    async fn update(&self, item: &Item) -> Result<bool, InventoryServiceError>;

    /// Returns `false` if no live item matched.
    async fn set_status(
        &self,
        id: &str,
        status: ItemStatus,
        actor_id: i32,
    ) -> Result<bool, InventoryServiceError>;

    /// Tombstone an item. Returns the number of rows affected.
    async fn soft_delete(&self, id: &str, actor_id: i32) -> Result<u64, InventoryServiceError>;

    async fn append_log(&self, entry: &AuditEntry) -> Result<(), InventoryServiceError>;
}

/// Repository for accounts. Lookups only return active accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, InventoryServiceError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, InventoryServiceError>;
    async fn create(&self, user: &NewUser) -> Result<(), InventoryServiceError>;
    async fn update_password(
        &self,
        id: i32,
        password_hash: &str,
    ) -> Result<(), InventoryServiceError>;

    /// Deactivate an account. Returns the number of rows affected.
    async fn soft_delete(&self, id: i32) -> Result<u64, InventoryServiceError>;

    async fn list_active(&self) -> Result<Vec<User>, InventoryServiceError>;
}

/// Port for outbound email.
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), InventoryServiceError>;
}

/// Port for the third-party barcode lookup service.
pub trait BarcodeLookup: Send + Sync {
    async fn lookup(&self, barcode: &str) -> Result<BarcodeProduct, InventoryServiceError>;
}
