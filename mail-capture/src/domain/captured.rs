use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Mailboxes, Message};

/// An immutable copy of a message, taken when the transport tried to send it.
#[derive(Debug, Clone, Serialize)]
pub struct CapturedMessage {
    id: Uuid,
    captured_at: DateTime<Utc>,
    from: Mailboxes,
    to: Mailboxes,
    subject: String,
    body: String,
}

impl CapturedMessage {
    pub fn capture(message: &dyn Message) -> Self {
        Self {
            id: Uuid::new_v4(),
            captured_at: Utc::now(),
            from: message.from().clone(),
            to: message.to().clone(),
            subject: message.subject().to_owned(),
            body: message.body().to_owned(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

impl Message for CapturedMessage {
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
