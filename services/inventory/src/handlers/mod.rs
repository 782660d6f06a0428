pub mod barcode;
pub mod health;
pub mod item;
pub mod session;
pub mod user;

use serde::Serialize;

/// Body returned by mutations: `{"success": true}`.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
