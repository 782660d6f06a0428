use anyhow::Context as _;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpSettings;
use crate::domain::repository::EmailSender;
use crate::error::InventoryServiceError;

pub const NOT_CONFIGURED: &str = "your admin did not set up email properly. \
    Please contact them to reset your password for you";

#[derive(Clone)]
struct Relay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

/// SMTP mailer over a STARTTLS relay. Without settings every send fails with
/// `EmailUnavailable`.
#[derive(Clone)]
pub struct SmtpEmailSender {
    relay: Option<Relay>,
}

impl SmtpEmailSender {
    pub fn new(settings: Option<SmtpSettings>) -> anyhow::Result<Self> {
        let Some(settings) = settings else {
            tracing::warn!("EMAIL_SMTP_SERV not set, password reset email disabled");
            return Ok(Self { relay: None });
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .with_context(|| format!("configure smtp relay {}", settings.host))?
            .port(settings.port)
            .credentials(Credentials::new(settings.username, settings.password))
            .build();

        Ok(Self {
            relay: Some(Relay {
                transport,
                from: settings.from,
            }),
        })
    }
}

impl EmailSender for SmtpEmailSender {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), InventoryServiceError> {
        let relay = self
            .relay
            .as_ref()
            .ok_or_else(|| InventoryServiceError::EmailUnavailable(NOT_CONFIGURED.to_owned()))?;

        let message = Message::builder()
            .from(relay.from.parse::<Mailbox>().context("parse sender address")?)
            .to(to.parse::<Mailbox>().context("parse recipient address")?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_owned())
            .context("build email")?;

        relay.transport.send(message).await.map_err(|e| {
            InventoryServiceError::EmailUnavailable(format!("failed to send email: {e}"))
        })?;
        tracing::info!(to, subject, "email sent");
        Ok(())
    }
}
