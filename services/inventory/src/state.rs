use sea_orm::DatabaseConnection;

use crate::infra::barcode::HttpBarcodeClient;
use crate::infra::db::{DbItemRepository, DbUserRepository};
use crate::infra::email::SmtpEmailSender;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: SmtpEmailSender,
    pub barcode: HttpBarcodeClient,
}

impl AppState {
    pub fn item_repo(&self) -> DbItemRepository {
        DbItemRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn email_sender(&self) -> SmtpEmailSender {
        self.mailer.clone()
    }

    pub fn barcode_client(&self) -> HttpBarcodeClient {
        self.barcode.clone()
    }
}
