use std::{ops::Deref, sync::Arc};

use color_eyre::eyre::{Context, Result};

use crate::{
    domain::{CapturedMessage, DeliveryHook, MailAssertionError, Message},
    services::{Ledger, Mailer, Recorder},
};

type AssertionResult<'a> = Result<&'a Mailbox, MailAssertionError>;

/// Per-test capture fixture: a fresh ledger, the recorder that feeds it, and
/// the assertions that read it.
///
/// Message-level assertions take an optional message. `None` means the most
/// recently recorded one. Each returns `&Self` on success so checks chain:
///
/// ```ignore
/// mailbox
///     .assert_sent_count(1)?
///     .assert_to("a@x.com", None)?
///     .assert_subject("Welcome", None)?;
/// ```
#[derive(Debug, Clone)]
pub struct Mailbox {
    ledger: Ledger,
    recorder: Arc<Recorder>,
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailbox {
    pub fn new() -> Self {
        let ledger = Ledger::new();
        let recorder = Arc::new(Recorder::new(ledger.clone()));
        Self { ledger, recorder }
    }

    /// Create an empty mailbox and register its recorder on `mailer`.
    pub fn install(mailer: &mut Mailer) -> Self {
        let mailbox = Self::new();
        mailer.register_hook(mailbox.recorder());
        mailbox
    }

    /// The hook to register on a transport other than `Mailer`.
    pub fn recorder(&self) -> Arc<dyn DeliveryHook> {
        self.recorder.clone()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn last(&self) -> Option<CapturedMessage> {
        self.ledger.last()
    }

    pub fn count(&self) -> usize {
        self.ledger.count()
    }

    pub fn messages(&self) -> Vec<CapturedMessage> {
        self.ledger.messages()
    }

    /// Pretty JSON of everything recorded so far.
    pub fn dump(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.ledger.messages())
            .wrap_err("failed to serialize recorded emails")
    }

    pub fn assert_sent_count(&self, expected: usize) -> AssertionResult<'_> {
        let actual = self.count();
        self.check(actual == expected, || MailAssertionError::CountMismatch {
            expected,
            actual,
        })
    }

    pub fn assert_any_sent(&self) -> AssertionResult<'_> {
        self.check(!self.ledger.is_empty(), || MailAssertionError::NoneSent)
    }

    pub fn assert_none_sent(&self) -> AssertionResult<'_> {
        let count = self.count();
        self.check(count == 0, || MailAssertionError::UnexpectedlySent { count })
    }

    pub fn assert_subject(
        &self,
        expected: &str,
        message: Option<&dyn Message>,
    ) -> AssertionResult<'_> {
        let message = self.resolve(message)?;
        self.check(message.subject() == expected, || {
            MailAssertionError::SubjectMismatch {
                expected: expected.to_owned(),
                actual: message.subject().to_owned(),
            }
        })
    }

    pub fn assert_body_equals(
        &self,
        expected: &str,
        message: Option<&dyn Message>,
    ) -> AssertionResult<'_> {
        let message = self.resolve(message)?;
        self.check(message.body() == expected, || MailAssertionError::BodyMismatch {
            expected: expected.to_owned(),
            actual: message.body().to_owned(),
        })
    }

    pub fn assert_body_contains(
        &self,
        excerpt: &str,
        message: Option<&dyn Message>,
    ) -> AssertionResult<'_> {
        let message = self.resolve(message)?;
        self.check(message.body().contains(excerpt), || {
            MailAssertionError::BodyExcerptMissing {
                excerpt: excerpt.to_owned(),
            }
        })
    }

    pub fn assert_from(
        &self,
        address: &str,
        message: Option<&dyn Message>,
    ) -> AssertionResult<'_> {
        let message = self.resolve(message)?;
        self.check(message.from().contains(address), || {
            MailAssertionError::MissingSender {
                address: address.to_owned(),
            }
        })
    }

    pub fn assert_to(
        &self,
        address: &str,
        message: Option<&dyn Message>,
    ) -> AssertionResult<'_> {
        let message = self.resolve(message)?;
        self.check(message.to().contains(address), || {
            MailAssertionError::MissingRecipient {
                address: address.to_owned(),
            }
        })
    }

    /// Passes when any recorded message, not only the last, was sent to `address`.
    pub fn assert_sent_to(&self, address: &str) -> AssertionResult<'_> {
        if self.ledger.is_empty() {
            return Err(self.failed(MailAssertionError::EmptyLedger));
        }
        self.check(!self.ledger.messages_to(address).is_empty(), || {
            MailAssertionError::MissingRecipient {
                address: address.to_owned(),
            }
        })
    }

    // An explicit message is only honoured once the ledger is known to be
    // non-empty.
    fn resolve<'a>(
        &self,
        message: Option<&'a dyn Message>,
    ) -> Result<Resolved<'a>, MailAssertionError> {
        if self.ledger.is_empty() {
            return Err(self.failed(MailAssertionError::EmptyLedger));
        }

        match message {
            Some(message) => Ok(Resolved::Explicit(message)),
            None => self
                .ledger
                .last()
                .map(Resolved::Latest)
                .ok_or(MailAssertionError::EmptyLedger),
        }
    }

    fn check<F>(&self, holds: bool, error: F) -> AssertionResult<'_>
    where
        F: FnOnce() -> MailAssertionError,
    {
        if holds {
            Ok(self)
        } else {
            Err(self.failed(error()))
        }
    }

    fn failed(&self, error: MailAssertionError) -> MailAssertionError {
        tracing::debug!(error = %error, recorded = self.count(), "Mail assertion failed");
        error
    }
}

/// The message an assertion runs against.
enum Resolved<'a> {
    Explicit(&'a dyn Message),
    Latest(CapturedMessage),
}

impl<'a> Deref for Resolved<'a> {
    type Target = dyn Message + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            Resolved::Explicit(message) => *message,
            Resolved::Latest(message) => message,
        }
    }
}
