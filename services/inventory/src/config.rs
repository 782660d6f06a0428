use serde::Deserialize;

use inventory_core::config::Config;

/// Inventory service configuration, read from the environment (and `.env`).
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on. Env var: `INVENTORY_PORT`.
    #[serde(default = "default_port")]
    pub inventory_port: u16,

    /// Barcode lookup endpoint. Lookup is disabled unless both URL and token are set.
    pub upc_url: Option<String>,
    pub upc_token: Option<String>,

    /// SMTP relay host. Email is disabled when unset.
    pub email_smtp_serv: Option<String>,
    #[serde(default = "default_smtp_port")]
    pub email_smtp_port: u16,
    #[serde(default)]
    pub email_username: String,
    #[serde(default)]
    pub email_password: String,
    /// Sender address; falls back to `email_username`.
    pub email_from_addr: Option<String>,

    /// Directory holding the built frontend, served for every unmatched path.
    pub frontend_path: Option<String>,
}

fn default_port() -> u16 {
    9090
}

fn default_smtp_port() -> u16 {
    587
}

impl Config for InventoryConfig {}

/// SMTP settings, present only when a relay host is configured.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

/// Barcode service settings, present only when both URL and token are configured.
#[derive(Debug, Clone)]
pub struct UpcSettings {
    pub url: String,
    pub token: String,
}

impl InventoryConfig {
    pub fn smtp(&self) -> Option<SmtpSettings> {
        let host = self.email_smtp_serv.as_ref().filter(|h| !h.is_empty())?;
        Some(SmtpSettings {
            host: host.clone(),
            port: self.email_smtp_port,
            username: self.email_username.clone(),
            password: self.email_password.clone(),
            from: self
                .email_from_addr
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| self.email_username.clone()),
        })
    }

    pub fn upc(&self) -> Option<UpcSettings> {
        match (&self.upc_url, &self.upc_token) {
            (Some(url), Some(token)) if !url.is_empty() && !token.is_empty() => Some(UpcSettings {
                url: url.clone(),
                token: token.clone(),
            }),
            _ => None,
        }
    }
}
