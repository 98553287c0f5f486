use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct FeedbackState {
    copied: Option<String>,
    generation: u64,
    revert: Option<JoinHandle<()>>,
}

/// The "copied" indicator of a page.
///
/// At most one item is marked at a time. A mark clears itself after the
/// configured delay unless a newer mark replaced it first; the older timer
/// is cancelled and could not clear the newer mark anyway.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    state: Arc<Mutex<FeedbackState>>,
    revert_after: Duration,
}

impl CopyFeedback {
    pub fn new(revert_after: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FeedbackState::default())),
            revert_after,
        }
    }

    pub fn revert_after(&self) -> Duration {
        self.revert_after
    }

    /// Mark `key` as copied and schedule the revert.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mark(&self, key: &str) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.copied = Some(key.to_string());

        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let delay = self.revert_after;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = shared.lock();
            if state.generation == generation {
                state.copied = None;
                state.revert = None;
            }
        });

        if let Some(previous) = state.revert.replace(handle) {
            previous.abort();
        }
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.state.lock().copied.as_deref() == Some(key)
    }

    pub fn current(&self) -> Option<String> {
        self.state.lock().copied.clone()
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_mark_reverts_after_delay() {
        let feedback = CopyFeedback::default();
        feedback.mark("ps-1");
        assert!(feedback.is_copied("ps-1"));

        tokio::time::sleep(Duration::from_millis(1_900)).await;
        assert!(feedback.is_copied("ps-1"));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(feedback.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_mark_supersedes_pending_revert() {
        let feedback = CopyFeedback::new(Duration::from_secs(2));
        feedback.mark("ps-1");
        tokio::time::sleep(Duration::from_millis(1_500)).await;

        feedback.mark("et-2");
        assert!(!feedback.is_copied("ps-1"));

        // The first timer would have fired at 2.0s
        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert!(feedback.is_copied("et-2"));

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        assert_eq!(feedback.current(), None);
    }
}
