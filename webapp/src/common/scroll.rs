use tracing::warn;

use folio::nav::ScrollLock;

// locks page scrolling by setting overflow on the document body
//
// if there is no window or body (which should not happen in a browser), the lock is
// skipped with a warning rather than panicking
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        if let Some(body) = document_body() {
            if let Err(err) = body.style().set_property("overflow", "hidden") {
                warn!("failed to lock page scroll: {err:?}");
            }
        }
    }

    fn unlock(&self) {
        if let Some(body) = document_body() {
            if let Err(err) = body.style().remove_property("overflow") {
                warn!("failed to unlock page scroll: {err:?}");
            }
        }
    }
}

fn document_body() -> Option<web_sys::HtmlElement> {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());

    if body.is_none() {
        warn!("no document body available for scroll lock");
    }

    body
}
