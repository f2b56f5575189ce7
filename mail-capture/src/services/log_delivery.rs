use color_eyre::eyre::Result;

use crate::domain::{DeliveryBackend, Message, OutboundMessage};

/// Backend that never leaves the process. It only logs what would have gone out.
#[derive(Debug, Default, Clone)]
pub struct LogDelivery;

#[async_trait::async_trait]
impl DeliveryBackend for LogDelivery {
    #[tracing::instrument(name = "Deliver email", skip_all)]
    async fn deliver(&self, message: &OutboundMessage) -> Result<()> {
        let recipients: Vec<&str> = message.to().addresses().map(|a| a.as_str()).collect();
        tracing::info!(
            recipients = ?recipients,
            subject = message.subject(),
            "Suppressed delivery of outbound email"
        );

        Ok(())
    }
}
