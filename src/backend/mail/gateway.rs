/**
 * Mail Gateway
 *
 * Outbound email dispatch via SMTP. The gateway is configured once at
 * startup; when no SMTP host is configured it operates in no-op mode and
 * logs instead of sending, which keeps development and tests free of mail
 * infrastructure.
 *
 * Dispatch failures propagate to the caller — a password-reset request
 * fails when its email cannot be sent.
 */

use crate::backend::error::BackendError;
use crate::backend::server::config::MailSettings;
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::sync::Arc;

/// A fully formed outbound email
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Async SMTP transport wrapper (or no-op)
#[derive(Clone)]
pub struct MailGateway {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
}

impl MailGateway {
    /// Build the gateway from configuration
    ///
    /// If the SMTP host is empty, operates in no-op mode (logs only).
    pub fn new(config: &MailSettings) -> Result<Self, BackendError> {
        let transport = if config.smtp_host.trim().is_empty() {
            tracing::warn!("SMTP host not configured; mail gateway will operate in no-op mode");
            None
        } else {
            let builder = if config.use_starttls {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            }
            .port(config.smtp_port);

            let builder = if let (Some(username), Some(password)) =
                (&config.smtp_username, &config.smtp_password)
            {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            } else {
                builder
            };

            Some(Arc::new(builder.build()))
        };

        Ok(Self { transport })
    }

    /// A gateway that never sends; used by tests.
    pub fn disabled() -> Self {
        Self { transport: None }
    }

    /// Send an email
    ///
    /// # Errors
    ///
    /// Address parse, message build, and SMTP transport failures all
    /// propagate; nothing is retried here.
    pub async fn send_mail(&self, email: OutgoingEmail) -> Result<(), BackendError> {
        let Some(transport) = &self.transport else {
            tracing::info!(
                to = %email.to,
                subject = %email.subject,
                "mail gateway in no-op mode; skipping actual send"
            );
            return Ok(());
        };

        let message = Message::builder()
            .from(email.from.parse::<Mailbox>()?)
            .to(email.to.parse::<Mailbox>()?)
            .subject(&email.subject)
            .header(header::ContentType::TEXT_HTML)
            .body(email.html)?;

        transport.send(message).await?;
        tracing::info!(to = %email.to, subject = %email.subject, "email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_gateway_accepts_mail() {
        let gateway = MailGateway::disabled();
        let result = gateway
            .send_mail(OutgoingEmail {
                from: "\"Sitegate\" <noreply@localhost>".to_string(),
                to: "user@example.com".to_string(),
                subject: "hello".to_string(),
                html: "<p>hi</p>".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_host_disables_transport() {
        let settings = MailSettings {
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            use_starttls: true,
            domain: "localhost".to_string(),
        };
        let gateway = MailGateway::new(&settings).unwrap();
        assert!(gateway.transport.is_none());
    }
}
