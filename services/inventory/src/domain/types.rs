use crate::error::InventoryServiceError;

/// Id of the seeded system account. It can never be deleted or reset, and it owns
/// rows written without an acting user.
pub const SYSTEM_USER_ID: i32 = 0;

/// Account record as stored.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub token: String,
    pub is_admin: bool,
    pub active: bool,
}

/// Account to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub token: String,
    pub is_admin: bool,
}

/// The parts of an account that downstream handlers may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl AuthUser {
    pub fn ensure_admin(&self) -> Result<(), InventoryServiceError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(InventoryServiceError::NotAdmin)
        }
    }
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

/// Outcome of resolving a token or credentials.
///
/// A missing or unknown credential is `Anonymous`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    User(AuthUser),
}

impl Identity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::User(_))
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::User(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    pub fn into_user(self) -> Option<AuthUser> {
        match self {
            Self::User(user) => Some(user),
            Self::Anonymous => None,
        }
    }
}

impl From<Option<User>> for Identity {
    fn from(user: Option<User>) -> Self {
        user.map_or(Self::Anonymous, |u| Self::User(u.into()))
    }
}

/// Item status. Every transition between the two states, including a
/// self-transition, is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    CheckedIn,
    CheckedOut,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "checked_in" => Some(Self::CheckedIn),
            "checked_out" => Some(Self::CheckedOut),
            _ => None,
        }
    }
}

/// Requested check-in/check-out direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    In,
    Out,
}

impl MoveDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn target_status(self) -> ItemStatus {
        match self {
            Self::In => ItemStatus::CheckedIn,
            Self::Out => ItemStatus::CheckedOut,
        }
    }
}

/// Inventory item. `id` is the externally supplied business key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    pub picture_url: String,
    pub details: String,
    pub location: String,
    pub last_performed_by: i32,
    pub quantity: i32,
    pub status: ItemStatus,
}

/// Audit log action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    CheckedIn,
    CheckedOut,
    Add,
    Delete,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Add => "add",
            Self::Delete => "delete",
        }
    }
}

impl From<ItemStatus> for AuditAction {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::CheckedIn => Self::CheckedIn,
            ItemStatus::CheckedOut => Self::CheckedOut,
        }
    }
}

/// One audit log row. The store stamps the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub user_id: i32,
    pub object_id: String,
    pub action: AuditAction,
    pub details: String,
}

/// Suggested item fields returned by the barcode service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarcodeProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub picture_url: String,
}
