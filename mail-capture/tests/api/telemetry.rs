use color_eyre::eyre::{eyre, Result};
use mail_capture::{
    domain::{DeliveryBackend, EmailClient, OutboundMessage},
    services::Mailer,
    Mailbox,
};

use crate::helpers::{get_random_email, init_test_tracing};

struct Unreachable;

#[async_trait::async_trait]
impl DeliveryBackend for Unreachable {
    async fn deliver(&self, _message: &OutboundMessage) -> Result<()> {
        Err(eyre!("connection refused"))
    }
}

#[tokio::test]
async fn should_attach_send_span_to_delivery_errors() {
    init_test_tracing();

    let mut mailer = Mailer::new(Unreachable);
    let mailbox = Mailbox::install(&mut mailer);

    let report = mailer
        .send_email(&get_random_email(), "Hi", "Hello")
        .await
        .unwrap_err();
    let rendered = format!("{report:?}");

    assert!(rendered.contains("SPANTRACE"), "no span trace in: {rendered}");
    assert!(rendered.contains("Send email"), "no send span in: {rendered}");
    assert!(rendered.contains("connection refused"));

    // The attempt was still recorded before delivery failed.
    mailbox.assert_sent_count(1).unwrap();
}
