use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

// the payload handed to a sender: a snapshot of the fields taken when the submit starts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

// contact form
//
// one instance per mounted contact page.  a submission is a single attempt with no
// retry and at most one in flight: begin_submit() refuses while submitting is set, and
// finish_submit() clears the flag whatever the outcome.  the fields are only cleared
// when the send succeeded, so a failure leaves what the user typed in place
//
// required-field checks are the browser's job (the inputs are marked required), so
// nothing here validates the values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        ContactForm::default()
    }

    #[cfg(test)]
    fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    // returns None (and changes nothing) when a send is already in flight
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.submitting {
            return None;
        }

        self.submitting = true;

        Some(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    pub fn finish_submit(&mut self, result: &Result<()>) {
        self.submitting = false;

        if result.is_ok() {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }
}

// message sender
//
// the seam between the form and whatever pretends to deliver it.  there is no network
// behind the site, so the browser implementation just waits and reports success.
// futures are not Send on wasm, hence ?Send
#[async_trait(?Send)]
pub trait MessageSender {
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

// run one delivery attempt and report it.  errors are logged here and handed back
// to the caller, who decides what the form does with them.  only the message size
// is logged; the sender's name and address stay out of the logs
pub async fn deliver<S>(sender: &S, message: &ContactMessage) -> Result<()>
where
    S: MessageSender + ?Sized,
{
    let result = sender.send(message).await;

    let bytes = message.message.len();
    match &result {
        Ok(()) => info!(bytes, "contact message sent"),
        Err(err) => error!(bytes, "failed to send contact message: {err}"),
    }

    result
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, time::Duration};

    use tokio::time::{Instant, sleep};

    use super::*;

    struct DelaySender {
        delay: Duration,
        fail: bool,
        calls: Cell<u32>,
    }

    impl DelaySender {
        fn new(fail: bool) -> Self {
            DelaySender {
                delay: Duration::from_millis(1000),
                fail,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl MessageSender for DelaySender {
        async fn send(&self, _message: &ContactMessage) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            sleep(self.delay).await;
            if self.fail {
                return Err(anyhow::Error::msg("simulated send failure"));
            }
            Ok(())
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Email, "ada@example.com");
        form.update_field(ContactField::Message, "hello");
        form
    }

    #[test]
    fn update_field_touches_only_that_field() {
        let mut form = ContactForm::new();
        form.update_field(ContactField::Name, "Ada");

        assert_eq!(
            form,
            ContactForm {
                name: String::from("Ada"),
                email: String::new(),
                message: String::new(),
                submitting: false,
            }
        );
        assert_eq!(form.field(ContactField::Name), "Ada");
        assert_eq!(form.field(ContactField::Email), "");
    }

    #[test]
    fn begin_submit_snapshots_and_sets_flag() {
        let mut form = filled();
        let message = form.begin_submit().expect("first submit should start");

        assert!(form.submitting);
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "hello");
    }

    #[test]
    fn second_begin_while_submitting_is_a_no_op() {
        let mut form = filled();
        form.begin_submit();
        let before = form.clone();

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form, before);
    }

    #[test]
    fn success_clears_fields() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(&Ok(()));

        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(&Err(anyhow::Error::msg("boom")));

        let mut expected = filled();
        expected.submitting = false;
        assert_eq!(form, expected);
    }

    #[test]
    fn fields_may_change_while_submitting() {
        let mut form = filled();
        form.begin_submit();
        form.update_field(ContactField::Message, "hello again");

        assert!(form.submitting);
        assert_eq!(form.message, "hello again");
    }

    #[tokio::test(start_paused = true)]
    async fn walkthrough_resets_after_the_delay() {
        let sender = DelaySender::new(false);
        let mut form = ContactForm::new();
        form.update_field(ContactField::Name, "Ada");
        assert_eq!(form.name, "Ada");
        assert!(!form.submitting);

        let start = Instant::now();
        let message = form.begin_submit().expect("submit should start");
        assert!(form.submitting);
        assert_eq!(form.name, "Ada");

        let result = deliver(&sender, &message).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));

        form.finish_submit(&result);
        assert_eq!(form, ContactForm::new());
        assert_eq!(sender.calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn re_entrant_submit_sends_only_once() {
        let sender = DelaySender::new(false);
        let mut form = filled();

        let first = form.begin_submit();
        let second = form.begin_submit();
        assert!(first.is_some());
        assert!(second.is_none());

        if let Some(message) = first {
            let result = deliver(&sender, &message).await;
            form.finish_submit(&result);
        }

        assert_eq!(sender.calls.get(), 1);
        assert!(!form.submitting);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_send_is_reported_and_not_retried() {
        let sender = DelaySender::new(true);
        let mut form = filled();

        let message = form.begin_submit().expect("submit should start");
        let result = deliver(&sender, &message).await;
        assert!(result.is_err());

        form.finish_submit(&result);
        assert!(!form.submitting);
        assert_eq!(form.name, "Ada");
        assert_eq!(sender.calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn independent_forms_do_not_share_state() {
        let sender = DelaySender::new(false);
        let mut first = filled();
        let mut second = filled();

        let message = first.begin_submit().expect("submit should start");
        assert!(!second.submitting);
        assert!(second.begin_submit().is_some());

        let result = deliver(&sender, &message).await;
        first.finish_submit(&result);

        assert_eq!(first, ContactForm::new());
        assert!(second.submitting);
        assert_eq!(second.name, "Ada");
    }
}
