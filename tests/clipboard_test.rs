//! Copy flow tests: clipboard write, toast and the self-reverting indicator

use people_services_wiki::clipboard::*;
use people_services_wiki::models::{Language, TemplateLength};
use people_services_wiki::views::{CopyTarget, ViewState};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

struct Harness {
    clipboard: Arc<MemoryClipboard>,
    notifier: Arc<RecordingNotifier>,
    action: CopyAction,
}

fn harness() -> Harness {
    let clipboard = Arc::new(MemoryClipboard::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let action = CopyAction::new(
        clipboard.clone(),
        notifier.clone(),
        CopyFeedback::new(Duration::from_secs(2)),
    );
    Harness {
        clipboard,
        notifier,
        action,
    }
}

#[tokio::test(start_paused = true)]
async fn test_copied_indicator_reverts_after_two_seconds() {
    let h = harness();
    h.action
        .copy("ps-2", "text", "Script copied to clipboard")
        .await
        .unwrap();

    assert!(h.action.feedback().is_copied("ps-2"));
    sleep(Duration::from_millis(1_999)).await;
    assert!(h.action.feedback().is_copied("ps-2"));
    sleep(Duration::from_millis(2)).await;
    assert!(!h.action.feedback().is_copied("ps-2"));
}

#[tokio::test(start_paused = true)]
async fn test_second_copy_supersedes_first_timer() {
    let h = harness();
    h.action.copy("ps-1", "one", "Script copied to clipboard").await.unwrap();
    sleep(Duration::from_millis(1_500)).await;
    h.action.copy("ps-3", "three", "Script copied to clipboard").await.unwrap();

    sleep(Duration::from_millis(1_000)).await;
    assert_eq!(h.action.feedback().current().as_deref(), Some("ps-3"));
    assert_eq!(h.clipboard.contents().as_deref(), Some("three"));

    sleep(Duration::from_millis(1_100)).await;
    assert_eq!(h.action.feedback().current(), None);
    assert_eq!(h.notifier.toasts().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_failure_keeps_previous_indicator_and_does_not_retry() {
    let h = harness();
    h.action.copy("et-1", "first", "Email template copied to clipboard").await.unwrap();

    h.clipboard.set_denied(Some("clipboard blocked".to_string()));
    let err = h
        .action
        .copy("et-2", "second", "Email template copied to clipboard")
        .await
        .unwrap_err();
    assert!(matches!(err, ClipboardError::Denied(_)));

    assert!(h.action.feedback().is_copied("et-1"));
    assert_eq!(h.clipboard.contents().as_deref(), Some("first"));

    let toasts = h.notifier.toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[1], Toast::copy_failed());
    assert_eq!(toasts[1].title, "Error");
}

#[tokio::test(start_paused = true)]
async fn test_featured_copy_uses_selected_length() {
    let h = harness();
    let target = CopyTarget::resolve("featured", Language::Pt).unwrap();
    let state = ViewState::new(Language::En).with_length(TemplateLength::Long);

    h.action.copy_target(&target, &state).await.unwrap();

    let copied = h.clipboard.contents().unwrap();
    let expected = people_services_wiki::content::featured_template()
        .text(Language::Pt, TemplateLength::Long);
    assert_eq!(copied, expected);
    assert!(h.action.feedback().is_copied("featured:pt"));
    assert_eq!(
        h.notifier.last().unwrap().description,
        "Portuguese version copied to clipboard"
    );
}

#[tokio::test(start_paused = true)]
async fn test_email_copy_includes_subject_line() {
    let h = harness();
    let target = CopyTarget::resolve("et-1", Language::En).unwrap();
    h.action
        .copy_target(&target, &ViewState::new(Language::En))
        .await
        .unwrap();
    let copied = h.clipboard.contents().unwrap();
    assert!(copied.starts_with("Subject: "));
    assert!(copied.contains("\n\n"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_missing_platform_command_is_unavailable() {
    let clipboard = SystemClipboard::new("ps-wiki-no-such-clipboard-tool", vec![]);
    let err = clipboard.write_text("x").await.unwrap_err();
    assert!(matches!(err, ClipboardError::Unavailable(_)));
}
