//! Copy-to-clipboard flow.
//!
//! Writing to the clipboard is the only fallible operation of the wiki. A
//! [`CopyAction`] awaits the write, then either flips the page's "copied"
//! indicator (which reverts on its own after a delay) and shows a toast, or
//! shows an error toast and leaves the indicator alone. Failures are never
//! retried.

mod action;
mod backend;
mod error;
mod feedback;
mod notify;

pub use action::CopyAction;
pub use backend::{Clipboard, MemoryClipboard, SystemClipboard};
pub use error::{ClipboardError, ClipboardResult};
pub use feedback::CopyFeedback;
pub use notify::{Notifier, RecordingNotifier, Toast, ToastVariant, TracingNotifier};
