use crate::domain::{CapturedMessage, DeliveryHook, Message};

use super::Ledger;

/// Delivery hook that copies every message the transport sees into a `Ledger`.
#[derive(Debug, Clone)]
pub struct Recorder {
    ledger: Ledger,
}

impl Recorder {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }
}

impl DeliveryHook for Recorder {
    fn on_deliver(&self, message: &dyn Message) {
        self.ledger.record(CapturedMessage::capture(message));
        tracing::debug!(
            subject = message.subject(),
            recorded = self.ledger.count(),
            "Recorded outbound email"
        );
    }
}
