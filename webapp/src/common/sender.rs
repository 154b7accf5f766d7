use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use folio::{
    config::ContactConfig,
    contact::{ContactMessage, MessageSender},
};

// there is no backend; "sending" is a browser timer followed by success, or failure
// when the config asks for it
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSender {
    delay_ms: u32,
    fail: bool,
}

impl SimulatedSender {
    pub fn new(config: &ContactConfig) -> Self {
        SimulatedSender {
            delay_ms: config.submit_delay_ms,
            fail: config.fail_sends,
        }
    }
}

#[async_trait(?Send)]
impl MessageSender for SimulatedSender {
    async fn send(&self, message: &ContactMessage) -> anyhow::Result<()> {
        debug!(
            { delay_ms = self.delay_ms, bytes = message.message.len() },
            "simulating contact send"
        );

        TimeoutFuture::new(self.delay_ms).await;

        if self.fail {
            return Err(anyhow::Error::msg("simulated send failure"));
        }

        Ok(())
    }
}
