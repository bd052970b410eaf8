use async_trait::async_trait;

/// Relays a visitor's contact-form message to the site owner's inbox, with
/// reply-to pointing back at the visitor.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn relay(&self, visitor_email: &str, subject: &str, body: &str) -> Result<(), String>;
}
