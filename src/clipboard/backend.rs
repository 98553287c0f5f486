use crate::clipboard::error::{ClipboardError, ClipboardResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Platform clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Clipboard backed by a platform program reading the text from stdin
/// (`xclip`, `wl-copy`, `pbcopy`, `clip`, ...)
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: String,
    args: Vec<String>,
}

impl SystemClipboard {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> ClipboardResult<()> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    ClipboardError::Unavailable(format!("`{}` not found", self.command))
                }
                std::io::ErrorKind::PermissionDenied => {
                    ClipboardError::Denied(format!("cannot run `{}`", self.command))
                }
                _ => ClipboardError::Io(e),
            })?;

        // A program that exits early closes the pipe; its exit status decides.
        let mut input_closed = false;
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(text.as_bytes()).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => input_closed = true,
                Err(e) => return Err(e.into()),
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                command: self.command.clone(),
                status: status.to_string(),
            });
        }
        if input_closed {
            return Err(ClipboardError::Denied(format!(
                "`{}` exited before reading the text",
                self.command
            )));
        }

        tracing::debug!(command = %self.command, bytes = text.len(), "clipboard written");
        Ok(())
    }
}

/// In-process clipboard, optionally refusing every write
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    deny: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes fail with `reason`
    pub fn denying(reason: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(None),
            deny: Mutex::new(Some(reason.into())),
        }
    }

    pub fn set_denied(&self, reason: Option<String>) {
        *self.deny.lock() = reason;
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> ClipboardResult<()> {
        if let Some(reason) = self.deny.lock().clone() {
            return Err(ClipboardError::Denied(reason));
        }
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}
