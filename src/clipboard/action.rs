use crate::clipboard::backend::Clipboard;
use crate::clipboard::error::ClipboardResult;
use crate::clipboard::feedback::CopyFeedback;
use crate::clipboard::notify::{Notifier, Toast};
use crate::views::{copy_payload, CopyTarget, ViewState};
use std::sync::Arc;

/// Copy button behaviour shared by every page
pub struct CopyAction {
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
    feedback: CopyFeedback,
}

impl CopyAction {
    pub fn new(
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
        feedback: CopyFeedback,
    ) -> Self {
        Self {
            clipboard,
            notifier,
            feedback,
        }
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    /// Write `text` and report the outcome.
    ///
    /// On success `key` is marked as copied and a confirmation toast with
    /// `description` is shown. On failure an error toast is shown, the
    /// indicator is left as it was, and the error is returned.
    pub async fn copy(&self, key: &str, text: &str, description: &str) -> ClipboardResult<()> {
        match self.clipboard.write_text(text).await {
            Ok(()) => {
                self.feedback.mark(key);
                self.notifier.notify(Toast::copied(description));
                tracing::info!(key, bytes = text.len(), "copied to clipboard");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "clipboard write failed");
                self.notifier.notify(Toast::copy_failed());
                Err(e)
            }
        }
    }

    /// Copy a page item using the page's current language and length
    pub async fn copy_target(&self, target: &CopyTarget, state: &ViewState) -> ClipboardResult<()> {
        let text = copy_payload(target, state);
        self.copy(&target.feedback_key(), &text, &target.copied_description())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{MemoryClipboard, RecordingNotifier, ToastVariant};
    use crate::models::Language;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_successful_copy_marks_and_notifies() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let action = CopyAction::new(
            clipboard.clone(),
            notifier.clone(),
            CopyFeedback::new(Duration::from_secs(2)),
        );

        let target = CopyTarget::resolve("ps-1", Language::Es).unwrap();
        let state = ViewState::new(Language::Es);
        action.copy_target(&target, &state).await.unwrap();

        assert!(clipboard
            .contents()
            .unwrap_or_default()
            .starts_with("Buenos días/tardes"));
        assert!(action.feedback().is_copied("ps-1"));
        assert_eq!(
            notifier.last(),
            Some(Toast::copied("Script copied to clipboard"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_copy_leaves_indicator() {
        let clipboard = Arc::new(MemoryClipboard::denying("permission denied"));
        let notifier = Arc::new(RecordingNotifier::new());
        let action = CopyAction::new(clipboard, notifier.clone(), CopyFeedback::default());

        let result = action.copy("et-1", "text", "Email template copied to clipboard").await;
        assert!(result.is_err());
        assert_eq!(action.feedback().current(), None);

        let toast = notifier.last().unwrap();
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.description, "Failed to copy to clipboard");
        assert_eq!(notifier.toasts().len(), 1);
    }
}
