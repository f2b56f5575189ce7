use std::sync::Arc;

use color_eyre::eyre::{Context, Result};

use crate::{
    domain::{
        DeliveryBackend, DeliveryHook, Email, EmailClient, Mailboxes, Message, OutboundMessage,
    },
    utils::{DEFAULT_FROM_ADDRESS, DEFAULT_FROM_NAME},
};

use super::LogDelivery;

/// In-process mail transport.
///
/// Every send runs through the registered hooks in registration order and
/// then reaches the delivery backend.
pub struct Mailer {
    hooks: Vec<Arc<dyn DeliveryHook>>,
    backend: Box<dyn DeliveryBackend>,
    default_from: Mailboxes,
}

impl Mailer {
    pub fn new(backend: impl DeliveryBackend + 'static) -> Self {
        Self {
            hooks: Vec::new(),
            backend: Box::new(backend),
            default_from: configured_sender(),
        }
    }

    /// Override the sender used for messages composed without one.
    pub fn with_default_from(mut self, address: Email, name: Option<&str>) -> Self {
        self.default_from = Mailboxes::new().with(address, name.map(str::to_owned));
        self
    }

    pub fn register_hook(&mut self, hook: Arc<dyn DeliveryHook>) {
        self.hooks.push(hook);
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }
}

impl Default for Mailer {
    fn default() -> Self {
        Self::new(LogDelivery)
    }
}

#[async_trait::async_trait]
impl EmailClient for Mailer {
    #[tracing::instrument(name = "Send email", skip_all)]
    async fn send(&self, mut message: OutboundMessage) -> Result<()> {
        message.set_default_from(&self.default_from);

        for hook in &self.hooks {
            hook.on_deliver(&message);
        }

        self.backend
            .deliver(&message)
            .await
            .wrap_err_with(|| format!("failed to deliver email {:?}", message.subject()))
    }
}

fn configured_sender() -> Mailboxes {
    match Email::parse(&DEFAULT_FROM_ADDRESS) {
        Ok(address) => Mailboxes::new().with(address, DEFAULT_FROM_NAME.clone()),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring invalid default sender");
            Mailboxes::new()
        }
    }
}
