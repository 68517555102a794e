//! Opening URLs in the user's default browser.

use std::process::{Command, Stdio};
use std::sync::{Mutex, PoisonError};

/// Errors that can occur when handing a URL to the platform opener
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// The opener process could not be started
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// No opener is known for this platform
    #[error("opening a browser is not supported on this platform")]
    Unsupported,

    /// Launch refused (used by test doubles)
    #[error("{0}")]
    Other(String),
}

/// Something that can open a URL for the user
pub trait BrowserLauncher {
    /// Open `url`; returns once the opener has been started
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Launches the platform's default browser through its opener command
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Result<(&'static str, Command), BrowserError> {
        let (program, args): (&'static str, Vec<&str>) = if cfg!(target_os = "macos") {
            ("open", vec![url])
        } else if cfg!(target_os = "windows") {
            ("cmd", vec!["/C", "start", "", url])
        } else if cfg!(unix) {
            ("xdg-open", vec![url])
        } else {
            return Err(BrowserError::Unsupported);
        };

        let mut cmd = Command::new(program);
        cmd.args(args);
        Ok((program, cmd))
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        let (program, cmd) = Self::command(url)?;
        tracing::debug!(program, url, "launching browser");

        spawn_detached(program, cmd)
    }
}

/// Start `cmd` with null stdio and reap it on a background thread.
fn spawn_detached(program: &'static str, mut cmd: Command) -> Result<(), BrowserError> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| BrowserError::Spawn { program, source })?;

    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            tracing::debug!(program, %status, "browser opener exited with failure")
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(program, error = %e, "failed to wait for browser opener"),
    });
    Ok(())
}

/// Launcher that records URLs instead of opening them.
#[derive(Debug, Default)]
pub struct RecordingBrowser {
    opened: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher that records every attempt and then fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// URLs passed to `open`, in call order
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl BrowserLauncher for RecordingBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        match &self.fail_with {
            Some(message) => Err(BrowserError::Other(message.clone())),
            None => Ok(()),
        }
    }
}
