//! SMTP-backed [`Notifier`] built on lettre's async tokio transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info, warn};

use super::Notifier;
use crate::domain::ContactRecord;
use configs::MailConfig;

pub struct SmtpNotifier {
    cfg: MailConfig,
}

impl SmtpNotifier {
    pub fn new(cfg: MailConfig) -> Self {
        Self { cfg }
    }

    fn sender(&self) -> String {
        self.cfg
            .sender_address
            .clone()
            .or_else(|| self.cfg.smtp_username.clone())
            .unwrap_or_else(|| "no-reply@localhost".to_string())
    }

    fn compose_notification(contact: &ContactRecord) -> (String, String) {
        let subject = format!(
            "New Contact Form Submission from {} {}",
            contact.first_name, contact.last_name
        );
        let body = format!(
            "New Contact Form Submission Received\n\
             \n\
             Contact Details:\n\
             ----------------\n\
             Name: {} {}\n\
             Email: {}\n\
             Phone: {}\n\
             \n\
             Message:\n\
             --------\n\
             {}\n\
             \n\
             ---\n\
             Submitted at: {}\n\
             Contact ID: {}",
            contact.first_name,
            contact.last_name,
            contact.email,
            contact.phone.as_deref().unwrap_or("N/A"),
            contact.message,
            contact.created_at,
            contact.id,
        );
        (subject, body)
    }

    fn compose_confirmation(contact: &ContactRecord) -> (String, String) {
        let subject = "Thank you for contacting us!".to_string();
        let body = format!(
            "Dear {},\n\
             \n\
             Thank you for reaching out to us. We have received your message \
             and will get back to you as soon as possible.\n\
             \n\
             Your Message:\n\
             {}\n\
             \n\
             Best regards,\n\
             Truck Dispatch Team",
            contact.first_name, contact.message,
        );
        (subject, body)
    }

    async fn send(&self, to: &str, subject: String, body: String) -> bool {
        let Some(host) = self.cfg.smtp_host.as_deref().filter(|h| !h.trim().is_empty()) else {
            warn!("SMTP host not configured; skipping email to {to}");
            return false;
        };

        let from = match self.sender().parse::<Mailbox>() {
            Ok(m) => m,
            Err(e) => {
                error!(error = %e, "invalid sender address; email not sent");
                return false;
            }
        };
        let to_mailbox = match to.parse::<Mailbox>() {
            Ok(m) => m,
            Err(e) => {
                error!(error = %e, %to, "invalid recipient address; email not sent");
                return false;
            }
        };

        let message = match Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
        {
            Ok(m) => m,
            Err(e) => {
                error!(error = %e, "failed to build email message");
                return false;
            }
        };

        let builder = match AsyncSmtpTransport::<Tokio1Executor>::relay(host) {
            Ok(b) => b,
            Err(e) => {
                error!(error = %e, %host, "failed to configure SMTP relay");
                return false;
            }
        };
        let builder = match (self.cfg.smtp_username.clone(), self.cfg.smtp_password.clone()) {
            (Some(user), Some(pass)) => builder.credentials(Credentials::new(user, pass)),
            _ => builder,
        };
        let transport = builder.build();

        match transport.send(message).await {
            Ok(_) => {
                info!(%to, "email sent");
                true
            }
            Err(e) => {
                error!(error = %e, %to, "failed to send email");
                false
            }
        }
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn contact_notification(&self, contact: &ContactRecord) -> bool {
        let Some(admin) = self.cfg.admin_address.as_deref().filter(|a| !a.trim().is_empty())
        else {
            warn!("admin address not configured; skipping contact notification");
            return false;
        };
        let admin = admin.to_string();
        let (subject, body) = Self::compose_notification(contact);
        let sent = self.send(&admin, subject, body).await;
        if sent {
            info!(contact_id = contact.id, "contact notification sent to {admin}");
        }
        sent
    }

    async fn contact_confirmation(&self, contact: &ContactRecord) -> bool {
        let (subject, body) = Self::compose_confirmation(contact);
        self.send(&contact.email, subject, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record() -> ContactRecord {
        ContactRecord {
            id: 42,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            full_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: None,
            message: "Need dispatch help please".into(),
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn notification_template_includes_details() {
        let (subject, body) = SmtpNotifier::compose_notification(&record());
        assert_eq!(subject, "New Contact Form Submission from Jane Doe");
        assert!(body.contains("Email: jane@x.com"));
        assert!(body.contains("Phone: N/A"));
        assert!(body.contains("Need dispatch help please"));
        assert!(body.contains("Contact ID: 42"));
    }

    #[test]
    fn confirmation_template_addresses_submitter() {
        let (subject, body) = SmtpNotifier::compose_confirmation(&record());
        assert_eq!(subject, "Thank you for contacting us!");
        assert!(body.starts_with("Dear Jane,"));
        assert!(body.contains("Need dispatch help please"));
    }

    #[tokio::test]
    async fn unconfigured_admin_address_skips_send() {
        let notifier = SmtpNotifier::new(MailConfig::default());
        assert!(!notifier.contact_notification(&record()).await);
    }

    #[tokio::test]
    async fn missing_smtp_host_reports_failure() {
        let cfg = MailConfig { admin_address: Some("ops@example.com".into()), ..Default::default() };
        let notifier = SmtpNotifier::new(cfg);
        assert!(!notifier.contact_notification(&record()).await);
    }
}
