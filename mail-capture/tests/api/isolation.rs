use std::sync::Arc;

use mail_capture::{services::Mailer, Mailbox};

use crate::helpers::{get_random_email, AccountNotifier, TestApp};

#[tokio::test]
async fn should_start_every_fixture_empty() {
    let first = TestApp::new();
    first
        .notifier
        .welcome(&get_random_email())
        .await
        .unwrap();
    first.mailbox.assert_sent_count(1).unwrap();
    first.clean_up();

    let second = TestApp::new();
    second.mailbox.assert_none_sent().unwrap();
    second.clean_up();
}

#[tokio::test]
async fn should_keep_parallel_fixtures_apart() {
    let mut handles = Vec::new();

    for sends in 1..=4usize {
        handles.push(tokio::spawn(async move {
            let app = TestApp::new();
            let recipient = get_random_email();
            for _ in 0..sends {
                app.notifier.welcome(&recipient).await.unwrap();
            }

            let ok = app.mailbox.assert_sent_count(sends).is_ok()
                && app.mailbox.assert_to(recipient.as_str(), None).is_ok();
            app.clean_up();
            ok
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap());
    }
}

#[tokio::test]
async fn should_record_into_every_installed_mailbox() {
    let mut mailer = Mailer::default();
    let first = Mailbox::install(&mut mailer);
    let second = Mailbox::install(&mut mailer);
    let notifier = AccountNotifier::new(Arc::new(mailer));

    notifier.welcome(&get_random_email()).await.unwrap();

    first.assert_sent_count(1).unwrap();
    second.assert_sent_count(1).unwrap();
    assert_ne!(first.last().unwrap().id(), second.last().unwrap().id());
}
