use color_eyre::eyre::{Context, Result};

use super::{Email, Message, OutboundMessage};

/// A plugin on the transport's send pipeline.
///
/// The transport calls `on_deliver` once per send attempt, synchronously and in
/// call order, before the message reaches any delivery backend.
pub trait DeliveryHook: Send + Sync {
    fn on_deliver(&self, message: &dyn Message);
}

/// Where the transport hands a message after every hook has seen it.
#[async_trait::async_trait]
pub trait DeliveryBackend: Send + Sync {
    async fn deliver(&self, message: &OutboundMessage) -> Result<()>;
}

// This trait is what application code sends mail through.
#[async_trait::async_trait]
pub trait EmailClient: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<()>;

    /// Send a single-recipient message using the transport's default sender.
    async fn send_email(&self, recipient: &Email, subject: &str, content: &str) -> Result<()> {
        let message = OutboundMessage::builder()
            .to(recipient.clone(), None)
            .subject(subject)
            .body(content)
            .build()
            .wrap_err("failed to compose email")?;

        self.send(message).await
    }
}
