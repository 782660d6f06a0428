use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use inventory::domain::credentials::hash_password;
use inventory::domain::repository::{EmailSender, ItemRepository, UserRepository};
use inventory::domain::types::{AuditEntry, Item, ItemStatus, NewUser, SYSTEM_USER_ID, User};
use inventory::error::InventoryServiceError;
use inventory::usecase::session::{CheckCredentialsUseCase, LoginUseCase};

// ── InMemoryItemRepo ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StoredItem {
    pub item: Item,
    pub deleted: bool,
}

/// Item store that keeps tombstoned rows, mirroring the database table.
#[derive(Clone, Default)]
pub struct InMemoryItemRepo {
    pub items: Arc<Mutex<BTreeMap<String, StoredItem>>>,
    pub logs: Arc<Mutex<Vec<AuditEntry>>>,
}

impl InMemoryItemRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shared handle to the audit log for post-execution inspection.
    pub fn logs_handle(&self) -> Arc<Mutex<Vec<AuditEntry>>> {
        Arc::clone(&self.logs)
    }

    pub fn stored(&self, id: &str) -> Option<StoredItem> {
        self.items.lock().unwrap().get(id).cloned()
    }

    fn live(&self, id: &str) -> bool {
        self.items
            .lock()
            .unwrap()
            .get(id)
            .is_some_and(|s| !s.deleted)
    }
}

impl ItemRepository for InMemoryItemRepo {
    async fn exists(&self, id: &str) -> Result<bool, InventoryServiceError> {
        Ok(self.live(id))
    }

    async fn search(&self, query: &str) -> Result<Vec<Item>, InventoryServiceError> {
        let needle = query.to_lowercase();
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|s| !s.deleted)
            .filter(|s| {
                let i = &s.item;
                i.id == query
                    || [&i.id, &i.name, &i.category, &i.details, &i.location]
                        .iter()
                        .any(|f| f.to_lowercase().split_whitespace().any(|w| w == needle))
            })
            .map(|s| s.item.clone())
            .collect())
    }

    async fn insert(&self, item: &Item) -> Result<bool, InventoryServiceError> {
        let mut items = self.items.lock().unwrap();
        if items.get(&item.id).is_some_and(|s| !s.deleted) {
            return Ok(false);
        }
        items.insert(
            item.id.clone(),
            StoredItem {
                item: item.clone(),
                deleted: false,
            },
        );
        Ok(true)
    }

    async fn update(&self, item: &Item) -> Result<bool, InventoryServiceError> {
        let mut items = self.items.lock().unwrap();
        match items.get_mut(&item.id).filter(|s| !s.deleted) {
            Some(stored) => {
                let status = stored.item.status;
                stored.item = Item {
                    status,
                    ..item.clone()
                };
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_status(
        &self,
        id: &str,
        status: ItemStatus,
        actor_id: i32,
    ) -> Result<bool, InventoryServiceError> {
        let mut items = self.items.lock().unwrap();
        match items.get_mut(id).filter(|s| !s.deleted) {
            Some(stored) => {
                stored.item.status = status;
                stored.item.last_performed_by = actor_id;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, id: &str, actor_id: i32) -> Result<u64, InventoryServiceError> {
        let mut items = self.items.lock().unwrap();
        match items.get_mut(id).filter(|s| !s.deleted) {
            Some(stored) => {
                stored.deleted = true;
                stored.item.last_performed_by = actor_id;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn append_log(&self, entry: &AuditEntry) -> Result<(), InventoryServiceError> {
        self.logs.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

// ── InMemoryUserRepo ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct InMemoryUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepo {
    /// Store seeded with the system account, like a freshly migrated database.
    pub fn seeded() -> Self {
        Self {
            users: Arc::new(Mutex::new(vec![User {
                id: SYSTEM_USER_ID,
                username: "system".into(),
                email: String::new(),
                password_hash: "!".into(),
                token: "system-token".into(),
                is_admin: true,
                active: true,
            }])),
        }
    }

    pub fn with_user(
        self,
        id: i32,
        username: &str,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> Self {
        self.users.lock().unwrap().push(User {
            id,
            username: username.into(),
            email: email.into(),
            password_hash: hash_password(password).unwrap(),
            token: format!("{username}-token"),
            is_admin,
            active: true,
        });
        self
    }

    pub fn password_hash(&self, username: &str) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.password_hash.clone())
    }
}

impl UserRepository for InMemoryUserRepo {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, InventoryServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.active && u.username == username)
            .cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, InventoryServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.active && u.token == token)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<(), InventoryServiceError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(InventoryServiceError::UserAlreadyExists);
        }
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        users.push(User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            token: user.token.clone(),
            is_admin: user.is_admin,
            active: true,
        });
        Ok(())
    }

    async fn update_password(
        &self,
        id: i32,
        password_hash: &str,
    ) -> Result<(), InventoryServiceError> {
        if let Some(u) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            u.password_hash = password_hash.to_owned();
        }
        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<u64, InventoryServiceError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id && u.active) {
            Some(u) => {
                u.active = false;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn list_active(&self) -> Result<Vec<User>, InventoryServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.active)
            .cloned()
            .collect())
    }
}

pub fn login_usecase(repo: InMemoryUserRepo) -> LoginUseCase<InMemoryUserRepo> {
    LoginUseCase {
        credentials: CheckCredentialsUseCase { repo },
    }
}

// ── RecordingMailer ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub fail: bool,
    pub sent: Arc<Mutex<Vec<SentMail>>>,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }
}

impl EmailSender for RecordingMailer {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), InventoryServiceError> {
        if self.fail {
            return Err(InventoryServiceError::EmailUnavailable(
                "failed to send email: connection refused".into(),
            ));
        }
        self.sent.lock().unwrap().push(SentMail {
            to: to.into(),
            subject: subject.into(),
            body: html_body.into(),
        });
        Ok(())
    }
}

/// Extract the generated password from a reset email body.
pub fn password_from_mail(body: &str) -> &str {
    body.split("<b>")
        .nth(1)
        .and_then(|rest| rest.split("</b>").next())
        .unwrap()
}
