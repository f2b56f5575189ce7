use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::domain::{CapturedMessage, Message};

/// Append-only record of every message intercepted during one test.
///
/// Clones share the same underlying sequence, which is how the recorder and
/// the assertion fixture see the same messages.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    messages: Arc<RwLock<Vec<CapturedMessage>>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, message: CapturedMessage) {
        self.messages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// The most recently recorded message, if any.
    pub fn last(&self) -> Option<CapturedMessage> {
        self.read().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Every recorded message in arrival order.
    pub fn messages(&self) -> Vec<CapturedMessage> {
        self.read().clone()
    }

    /// The latest message matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<CapturedMessage>
    where
        P: Fn(&CapturedMessage) -> bool,
    {
        self.read()
            .iter()
            .rev()
            .find(|message| predicate(message))
            .cloned()
    }

    pub fn messages_to(&self, address: &str) -> Vec<CapturedMessage> {
        self.read()
            .iter()
            .filter(|message| message.to().contains(address))
            .cloned()
            .collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<CapturedMessage>> {
        self.messages.read().unwrap_or_else(PoisonError::into_inner)
    }
}
