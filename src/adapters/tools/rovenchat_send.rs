//! Implements MessageSenderPort by running `rovenchat-send <recipient_id> <text>`.
//!
//! Both values travel as separate argv entries, so nothing in them is ever parsed by a shell.

use crate::domain::DomainError;
use crate::ports::MessageSenderPort;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

pub struct RovenchatSender {
    bin_path: PathBuf,
}

impl RovenchatSender {
    pub fn new(bin_path: impl AsRef<Path>) -> Self {
        Self {
            bin_path: bin_path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl MessageSenderPort for RovenchatSender {
    async fn send(&self, recipient_id: &str, text: &str) -> Result<(), DomainError> {
        let status = Command::new(&self.bin_path)
            .arg(recipient_id)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| DomainError::Dispatch(format!("{}: {}", self.bin_path.display(), e)))?;
        // Exit status carries no delivery contract.
        debug!(
            bin = %self.bin_path.display(),
            recipient_id,
            %status,
            "send tool finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_dispatch_error() {
        let sender = RovenchatSender::new("/nonexistent/rovenchat-test/rovenchat-send");
        let err = sender.send("id-9", "tere").await.unwrap_err();
        assert!(matches!(err, DomainError::Dispatch(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_shell_metacharacters_are_passed_literally() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("args.txt");
        let bin = crate::adapters::tools::test_support::write_script(
            dir.path(),
            "rovenchat-send",
            &format!(
                "#!/bin/sh\nprintf '%s\\n' \"$#\" \"$1\" \"$2\" > '{}'\n",
                out.display()
            ),
        );
        let marker = dir.path().join("pwned");
        let recipient = format!("id-9; touch {} #", marker.display());
        let text = format!("$(touch {}) \"quoted\" `id` && echo", marker.display());

        let sender = RovenchatSender::new(&bin);
        sender.send(&recipient, &text).await.unwrap();

        let got = std::fs::read_to_string(&out).unwrap();
        assert_eq!(got, format!("2\n{}\n{}\n", recipient, text));
        assert!(!marker.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let bin = crate::adapters::tools::test_support::write_script(
            dir.path(),
            "rovenchat-send",
            "#!/bin/sh\necho boom >&2\nexit 7\n",
        );
        let sender = RovenchatSender::new(&bin);
        assert!(sender.send("id-9", "tere").await.is_ok());
    }
}
