use thiserror::Error;

/// Why a mailbox assertion did not hold.
///
/// `EmptyLedger` means the assertion needed a message and none was recorded;
/// every other variant is an ordinary mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailAssertionError {
    #[error("no emails have been recorded, so there is no message to assert against")]
    EmptyLedger,
    #[error("expected {expected} emails to be sent, but {actual} were")]
    CountMismatch { expected: usize, actual: usize },
    #[error("no emails sent")]
    NoneSent,
    #[error("did not expect any emails, but {count} were sent")]
    UnexpectedlySent { count: usize },
    #[error("expected subject {expected:?}, found {actual:?}")]
    SubjectMismatch { expected: String, actual: String },
    #[error("expected body {expected:?}, found {actual:?}")]
    BodyMismatch { expected: String, actual: String },
    #[error("no matching body found: body does not contain {excerpt:?}")]
    BodyExcerptMissing { excerpt: String },
    #[error("no email was sent from {address}")]
    MissingSender { address: String },
    #[error("no email was sent to {address}")]
    MissingRecipient { address: String },
}

impl MailAssertionError {
    pub fn is_empty_ledger(&self) -> bool {
        matches!(self, Self::EmptyLedger)
    }
}
