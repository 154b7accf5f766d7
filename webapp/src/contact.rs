use dioxus::prelude::*;
use tracing::debug;

use crate::{common::sender::SimulatedSender, components::social::SocialLinks};
use folio::{
    config::{SiteConfig, SocialKind},
    contact::{ContactField, ContactForm, MessageSender, deliver},
};

#[derive(Clone, Debug, PartialEq)]
enum SubmitStatus {
    Idle,
    Sent,
    Failed(String),
}

// start_submit
//
// begins a send unless one is already in flight, returning whether it started.  the
// send runs as a detached task so leaving the page mid-send does not cancel it; when
// it finishes against a page that is gone, the signals are dropped and the result is
// discarded
fn start_submit<S>(
    sender: S,
    mut form: Signal<ContactForm>,
    mut status: Signal<SubmitStatus>,
) -> bool
where
    S: MessageSender + 'static,
{
    let begun = form.write().begin_submit();
    let Some(message) = begun else {
        debug!("ignoring submit while a send is in flight");
        return false;
    };

    status.set(SubmitStatus::Idle);

    spawn_forever(async move {
        let result = deliver(&sender, &message).await;
        finish_submit(form, status, result);
    });

    true
}

fn finish_submit(
    mut form: Signal<ContactForm>,
    mut status: Signal<SubmitStatus>,
    result: anyhow::Result<()>,
) {
    match form.try_write() {
        Ok(mut form) => form.finish_submit(&result),
        Err(_) => {
            debug!("contact page unmounted before the send finished, discarding result");
            return;
        }
    }

    let next = match result {
        Ok(()) => SubmitStatus::Sent,
        Err(err) => SubmitStatus::Failed(format!("Could not send your message: {err}")),
    };
    if let Ok(mut status) = status.try_write() {
        *status = next;
    }
}

// Contact
//
// each mounted page owns its own ContactForm
#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();
    let sender = SimulatedSender::new(&config.contact);

    let mut form = use_signal(ContactForm::new);
    let status = use_signal(|| SubmitStatus::Idle);

    let handle_submit = move |event: FormEvent| {
        event.prevent_default();
        start_submit(sender, form, status);
    };

    let submitting = form.read().submitting;

    rsx! {
        section { class: "page-section",
            header { class: "page-header",
                h1 { class: "page-title fade-up", "Get in Touch" }
                h2 {
                    class: "page-subtitle fade-up",
                    style: "animation-delay: 0.2s;",
                    "Let's create something amazing together"
                }
            }

            form { class: "card contact-form pop-in", onsubmit: handle_submit,
                div { class: "form-group",
                    label { r#for: "contact-name", "Name" }
                    input {
                        id: "contact-name",
                        name: "name",
                        r#type: "text",
                        required: true,
                        value: "{form.read().name}",
                        oninput: move |evt| form.write().update_field(ContactField::Name, evt.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "contact-email", "Email" }
                    input {
                        id: "contact-email",
                        name: "email",
                        r#type: "email",
                        required: true,
                        value: "{form.read().email}",
                        oninput: move |evt| form.write().update_field(ContactField::Email, evt.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "contact-message", "Message" }
                    textarea {
                        id: "contact-message",
                        name: "message",
                        required: true,
                        value: "{form.read().message}",
                        oninput: move |evt| form.write().update_field(ContactField::Message, evt.value()),
                    }
                }
                button {
                    class: "btn btn-accent",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting {
                        "Sending..."
                    } else {
                        "Send Message"
                    }
                }
                match &*status.read() {
                    SubmitStatus::Idle => rsx! {},
                    SubmitStatus::Sent => rsx! {
                        p { class: "status-message", "Message sent. Thanks for reaching out!" }
                    },
                    SubmitStatus::Failed(err) => rsx! {
                        p { class: "status-message error", "{err}" }
                    },
                }
            }

            SocialLinks {
                kinds: vec![
                    SocialKind::GitHub,
                    SocialKind::LinkedIn,
                    SocialKind::Email,
                    SocialKind::Twitter,
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        time::Duration,
    };

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use folio::contact::ContactMessage;

    type PageSignals = (Signal<ContactForm>, Signal<SubmitStatus>);

    // per test thread: the page's signals, how many sends ran, and the gate that holds
    // the send open until the test releases it
    thread_local! {
        static SHOW_PAGE: Cell<bool> = Cell::new(true);
        static SENDS: Cell<u32> = Cell::new(0);
        static SEND_FINISHED: Cell<bool> = Cell::new(false);
        static STARTED: RefCell<Vec<bool>> = RefCell::new(Vec::new());
        static GATE: RefCell<Option<oneshot::Receiver<()>>> = RefCell::new(None);
        static SIGNALS: RefCell<Option<PageSignals>> = RefCell::new(None);
    }

    struct GatedSender;

    #[async_trait(?Send)]
    impl MessageSender for GatedSender {
        async fn send(&self, _message: &ContactMessage) -> anyhow::Result<()> {
            SENDS.with(|sends| sends.set(sends.get() + 1));

            let gate = GATE.with(|gate| gate.borrow_mut().take());
            if let Some(gate) = gate {
                let _ = gate.await;
            }

            SEND_FINISHED.with(|finished| finished.set(true));
            Ok(())
        }
    }

    // fills the form and submits twice on mount, like a double click on the button
    #[component]
    fn SubmittingPage() -> Element {
        let mut form = use_signal(ContactForm::new);
        let status = use_signal(|| SubmitStatus::Idle);

        use_hook(move || {
            form.write().update_field(ContactField::Name, "Ada");
            SIGNALS.with(|signals| *signals.borrow_mut() = Some((form, status)));

            let first = start_submit(GatedSender, form, status);
            let second = start_submit(GatedSender, form, status);
            STARTED.with(|started| started.borrow_mut().extend([first, second]));
        });

        rsx! {}
    }

    fn app() -> Element {
        let show = SHOW_PAGE.with(|show| show.get());
        rsx! {
            if show {
                SubmittingPage {}
            }
        }
    }

    fn mount() -> (VirtualDom, oneshot::Sender<()>) {
        let (release, gate) = oneshot::channel();
        GATE.with(|slot| *slot.borrow_mut() = Some(gate));

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        (dom, release)
    }

    async fn settle(dom: &mut VirtualDom) {
        let _ = tokio::time::timeout(Duration::from_millis(200), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();
    }

    fn signals() -> PageSignals {
        SIGNALS
            .with(|signals| *signals.borrow())
            .expect("page should have registered its signals")
    }

    #[tokio::test]
    async fn double_submit_sends_once_and_resets_on_success() {
        let (mut dom, release) = mount();
        let (form, status) = signals();

        assert_eq!(STARTED.with(|started| started.borrow().clone()), vec![true, false]);
        dom.in_runtime(|| {
            assert!(form.peek().submitting);
            assert_eq!(form.peek().name, "Ada");
        });

        release.send(()).expect("send should still be waiting");
        settle(&mut dom).await;

        assert_eq!(SENDS.with(|sends| sends.get()), 1);
        dom.in_runtime(|| {
            assert_eq!(*form.peek(), ContactForm::new());
            assert_eq!(*status.peek(), SubmitStatus::Sent);
        });
    }

    #[tokio::test]
    async fn completion_after_unmount_is_discarded() {
        let (mut dom, release) = mount();
        let (form, _status) = signals();

        SHOW_PAGE.with(|show| show.set(false));
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        assert!(dom.in_runtime(|| form.try_peek().is_err()));

        release.send(()).expect("send should still be waiting");
        settle(&mut dom).await;

        assert!(SEND_FINISHED.with(|finished| finished.get()));
        assert_eq!(SENDS.with(|sends| sends.get()), 1);
    }
}
