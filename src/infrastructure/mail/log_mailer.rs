use async_trait::async_trait;

use crate::application::ports::{MailError, Mailer, OutgoingEmail};

/// Hands mail to the log instead of an SMTP relay.
pub struct LogMailer {
    from_address: String,
}

impl LogMailer {
    pub fn new(from_address: String) -> Self {
        Self { from_address }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    #[tracing::instrument(skip(self, email), fields(to = %email.to))]
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        if !email.to.contains('@') {
            return Err(MailError::Delivery(format!(
                "invalid recipient address: {}",
                email.to
            )));
        }

        tracing::info!(
            from = %self.from_address,
            subject = %email.subject,
            body_chars = email.body.chars().count(),
            "Email dispatched"
        );
        Ok(())
    }
}
