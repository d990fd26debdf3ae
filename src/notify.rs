//! User-facing notifications: success and error notices plus yes/no
//! confirmation prompts.
//!
//! The controller and the notes service only see the [`Notifier`] trait. The
//! CLI prints to the terminal, the TUI forwards everything to its event loop
//! through a channel.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use async_trait::async_trait;
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Present a notice without waiting for the user
    fn notify(&self, notice: Notice);

    /// Ask a yes/no question. Anything other than an explicit yes is a no.
    async fn confirm(&self, message: &str) -> bool;

    fn success(&self, message: &str) {
        self.notify(Notice::success(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notice::error(message));
    }
}

// ============================================================================
// Console
// ============================================================================

/// Prints notices to stdout/stderr and reads confirmations from stdin
#[derive(Debug, Default, Clone)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message.green()),
            NoticeLevel::Error => eprintln!("{} {}", "Error:".red().bold(), notice.message),
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        if !atty::is(atty::Stream::Stdin) {
            eprintln!(
                "{} {} (stdin is not a terminal, use --yes to confirm)",
                "Declined:".yellow(),
                message
            );
            return false;
        }

        let prompt = message.to_string();
        tokio::task::spawn_blocking(move || {
            print!("{} [y/N] ", prompt.yellow());
            let _ = io::stdout().flush();
            let mut answer = String::new();
            match io::stdin().lock().read_line(&mut answer) {
                Ok(_) => is_yes(&answer),
                Err(_) => false,
            }
        })
        .await
        .unwrap_or(false)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Wraps another notifier and answers every confirmation with yes (`--yes`)
pub struct AutoConfirm<N> {
    inner: N,
}

impl<N> AutoConfirm<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<N: Notifier> Notifier for AutoConfirm<N> {
    fn notify(&self, notice: Notice) {
        self.inner.notify(notice);
    }

    async fn confirm(&self, message: &str) -> bool {
        tracing::debug!("auto-confirmed: {message}");
        true
    }
}

// ============================================================================
// Channel (TUI)
// ============================================================================

/// Events delivered to the TUI event loop
#[derive(Debug)]
pub enum UiEvent {
    Notice(Notice),
    Confirm {
        message: String,
        reply: oneshot::Sender<bool>,
    },
}

/// Forwards notices and confirmation requests over an unbounded channel.
///
/// A confirmation whose reply sender is dropped (the UI went away) counts as
/// declined.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if self.tx.send(UiEvent::Notice(notice)).is_err() {
            tracing::debug!("notice dropped: UI is gone");
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = UiEvent::Confirm {
            message: message.to_string(),
            reply,
        };
        if self.tx.send(request).is_err() {
            return false;
        }
        answer.await.unwrap_or(false)
    }
}

// ============================================================================
// Recording
// ============================================================================

/// Collects notices in memory and answers confirmations from a preset value
#[derive(Debug, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    answer: bool,
}

impl RecordingNotifier {
    pub fn new(answer: bool) -> Self {
        Self {
            notices: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            answer,
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NoticeLevel::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NoticeLevel::Success)
    }

    /// Confirmation prompts asked so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }

    async fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().push(message.to_string());
        self.answer
    }
}
