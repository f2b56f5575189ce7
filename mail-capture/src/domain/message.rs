use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::Email;

/// The view of an outbound email that capture and assertions rely on.
///
/// Any transport can plug into the recorder as long as its message type
/// exposes these four fields.
pub trait Message {
    fn from(&self) -> &Mailboxes;
    fn to(&self) -> &Mailboxes;
    fn subject(&self) -> &str;
    fn body(&self) -> &str;
}

/// A set of addresses, each with an optional display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mailboxes(BTreeMap<Email, Option<String>>);

impl Mailboxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or renames) a mailbox.
    pub fn insert(&mut self, address: Email, name: Option<String>) {
        self.0.insert(address, name);
    }

    pub fn with(mut self, address: Email, name: Option<String>) -> Self {
        self.insert(address, name);
        self
    }

    pub fn contains(&self, address: &str) -> bool {
        self.0.contains_key(address)
    }

    pub fn display_name(&self, address: &str) -> Option<&str> {
        self.0.get(address).and_then(|name| name.as_deref())
    }

    pub fn addresses(&self) -> impl Iterator<Item = &Email> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A message composed by application code and handed to an `EmailClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    from: Mailboxes,
    to: Mailboxes,
    subject: String,
    body: String,
}

impl OutboundMessage {
    pub fn builder() -> OutboundMessageBuilder {
        OutboundMessageBuilder::default()
    }

    /// Used by the transport to apply its configured sender.
    pub(crate) fn set_default_from(&mut self, from: &Mailboxes) {
        if self.from.is_empty() {
            self.from = from.clone();
        }
    }
}

impl Message for OutboundMessage {
    fn from(&self) -> &Mailboxes {
        &self.from
    }

    fn to(&self) -> &Mailboxes {
        &self.to
    }

    fn subject(&self) -> &str {
        &self.subject
    }

    fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Debug, Default)]
pub struct OutboundMessageBuilder {
    from: Mailboxes,
    to: Mailboxes,
    subject: String,
    body: String,
}

impl OutboundMessageBuilder {
    pub fn from(mut self, address: Email, name: Option<&str>) -> Self {
        self.from.insert(address, name.map(str::to_owned));
        self
    }

    pub fn to(mut self, address: Email, name: Option<&str>) -> Self {
        self.to.insert(address, name.map(str::to_owned));
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// An empty `from` is allowed; the transport fills in its default sender.
    pub fn build(self) -> Result<OutboundMessage, MessageError> {
        if self.to.is_empty() {
            return Err(MessageError::NoRecipients);
        }

        Ok(OutboundMessage {
            from: self.from,
            to: self.to,
            subject: self.subject,
            body: self.body,
        })
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum MessageError {
    #[error("Message has no recipients")]
    NoRecipients,
}
