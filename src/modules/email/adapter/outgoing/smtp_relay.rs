// src/modules/email/adapter/outgoing/smtp_relay.rs

use crate::email::application::ports::outgoing::ContactRelay;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpContactRelay {
    mailer: Box<dyn Mailer>,
    from_email: String,
    to_email: String,
}

impl SmtpContactRelay {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, to_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            to_email: to_email.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
        to_email: &str,
    ) -> Result<Self, String> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| e.to_string())?
            .credentials(creds)
            .build();

        Ok(Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
            to_email: to_email.to_string(),
        })
    }

    /// Wired only when the full SMTP config is present; the route answers
    /// 500 otherwise.
    pub fn from_env() -> Option<Self> {
        let server = std::env::var("SMTP_SERVER").ok()?;
        let username = std::env::var("SMTP_USERNAME").ok()?;
        let password = std::env::var("SMTP_PASSWORD").ok()?;
        let from_email = std::env::var("CONTACT_FROM_EMAIL").ok()?;
        let to_email = std::env::var("CONTACT_TO_EMAIL").unwrap_or_else(|_| from_email.clone());

        Self::new(&server, &username, &password, &from_email, &to_email).ok()
    }
}

#[async_trait]
impl ContactRelay for SmtpContactRelay {
    async fn relay(&self, visitor_email: &str, subject: &str, body: &str) -> Result<(), String> {
        let email = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(self.to_email.parse().map_err(|e| format!("{:?}", e))?)
            .reply_to(visitor_email.parse().map_err(|e| format!("{:?}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(format!("Sender Email: {}\n\n{}", visitor_email, body))
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await.map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingMailer {
        last: Arc<Mutex<Option<Message>>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            *self.last.lock().unwrap() = Some(email);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_relay_builds_a_reply_to_message() {
        let last = Arc::new(Mutex::new(None));
        let relay = SmtpContactRelay::new_with_mailer(
            Box::new(RecordingMailer { last: last.clone() }),
            "site@example.com",
            "owner@example.com",
        );

        relay
            .relay("visitor@example.com", "Hello", "I liked your site.")
            .await
            .unwrap();

        let message = last.lock().unwrap().take().unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Reply-To: visitor@example.com"));
        assert!(formatted.contains("Subject: Hello"));
        assert!(formatted.contains("Sender Email: visitor@example.com"));
    }

    #[tokio::test]
    async fn test_relay_rejects_an_unparseable_visitor_address() {
        struct PanicMailer;
        #[async_trait]
        impl Mailer for PanicMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                panic!("Should not reach the mailer with an invalid reply-to");
            }
        }

        let relay = SmtpContactRelay::new_with_mailer(
            Box::new(PanicMailer),
            "site@example.com",
            "owner@example.com",
        );

        let result = relay.relay("not an address", "Subject", "Body").await;
        assert!(result.is_err());
    }
}
