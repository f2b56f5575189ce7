use std::sync::Arc;

use color_eyre::eyre::{Context, Result};
use lazy_static::lazy_static;
use mail_capture::{
    domain::{Email, EmailClient, OutboundMessage},
    services::Mailer,
    utils::init_tracing,
    Mailbox,
};
use uuid::Uuid;

lazy_static! {
    // The report hook and the subscriber can only be installed once per process.
    static ref TRACING: () = {
        color_eyre::config::HookBuilder::new()
            .capture_span_trace_by_default(true)
            .install()
            .expect("Failed to install color_eyre");
        init_tracing().expect("Failed to initialize tracing");
    };
}

pub struct TestApp {
    pub mailbox: Mailbox,
    pub notifier: AccountNotifier,
    pub email_client: Arc<dyn EmailClient>,
}

pub fn init_test_tracing() {
    lazy_static::initialize(&TRACING);
}

impl TestApp {
    pub fn new() -> Self {
        init_test_tracing();

        let mut mailer = Mailer::default()
            .with_default_from(Email::parse("accounts@example.com").unwrap(), Some("Accounts"));
        let mailbox = Mailbox::install(&mut mailer);

        let email_client = Arc::new(mailer) as Arc<dyn EmailClient>;
        let notifier = AccountNotifier::new(email_client.clone());

        Self {
            mailbox,
            notifier,
            email_client,
        }
    }

    /// Drops the fixture, and with it everything recorded during the test.
    pub fn clean_up(self) {
        tracing::debug!(recorded = self.mailbox.count(), "Discarding test mailbox");
    }
}

pub fn get_random_email() -> Email {
    Email::parse(&format!("{}@example.com", Uuid::new_v4())).expect("valid random address")
}

/// Stand-in for application code that sends account emails.
pub struct AccountNotifier {
    email_client: Arc<dyn EmailClient>,
}

impl AccountNotifier {
    pub fn new(email_client: Arc<dyn EmailClient>) -> Self {
        Self { email_client }
    }

    pub async fn welcome(&self, recipient: &Email) -> Result<()> {
        self.email_client
            .send_email(
                recipient,
                "Welcome aboard",
                &format!("Hello {recipient}, thanks for signing up."),
            )
            .await
    }

    pub async fn send_two_fa_code(&self, recipient: &Email, code: &str) -> Result<()> {
        self.email_client
            .send_email(recipient, "Your login code", &format!("Your login code is {code}."))
            .await
    }

    pub async fn announce(&self, recipients: &[Email], subject: &str, body: &str) -> Result<()> {
        let message = recipients
            .iter()
            .fold(
                OutboundMessage::builder()
                    .from(Email::parse("news@example.com")?, Some("Newsletter")),
                |builder, recipient| builder.to(recipient.clone(), None),
            )
            .subject(subject)
            .body(body)
            .build()
            .wrap_err("failed to compose announcement")?;

        self.email_client.send(message).await
    }
}
