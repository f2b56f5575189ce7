//! Capture outbound email during a test and assert on what was sent.
//!
//! A [`Mailbox`] is created for each test and installed on the [`Mailer`] the
//! code under test sends through. Every send attempt is recorded in order and
//! the mailbox's assertions read that record.
//!
//! [`Mailer`]: services::Mailer

pub mod domain;
pub mod mailbox;
pub mod services;
pub mod utils;

pub use mailbox::Mailbox;
