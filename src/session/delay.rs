use async_trait::async_trait;
use std::time::Duration;

/// Stand-in for network latency before a canned reply shows up.
#[async_trait]
pub trait ReplyDelay: Send + Sync {
    async fn wait(&self);
}

#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_millis(1500)
    }
}

#[async_trait]
impl ReplyDelay for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl ReplyDelay for NoDelay {
    async fn wait(&self) {}
}
