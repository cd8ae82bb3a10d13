//! Implements AddressResolverPort by running `tailscale ip -4`.

use crate::ports::AddressResolverPort;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Queries the local Tailscale daemon for this node's IPv4 address.
pub struct TailscaleResolver {
    bin_path: PathBuf,
}

impl TailscaleResolver {
    pub fn new(bin_path: impl AsRef<Path>) -> Self {
        Self {
            bin_path: bin_path.as_ref().to_path_buf(),
        }
    }
}

/// First non-empty line of the tool output, trimmed.
pub fn first_address_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl AddressResolverPort for TailscaleResolver {
    async fn resolve_ipv4(&self) -> Option<String> {
        let output = match Command::new(&self.bin_path)
            .args(["ip", "-4"])
            .kill_on_drop(true)
            .output()
            .await
        {
            Ok(o) => o,
            Err(e) => {
                debug!(bin = %self.bin_path.display(), error = %e, "address tool not runnable");
                return None;
            }
        };
        if !output.status.success() {
            debug!(
                bin = %self.bin_path.display(),
                status = %output.status,
                "address tool exited with failure"
            );
            return None;
        }
        let addr = first_address_line(&String::from_utf8_lossy(&output.stdout));
        if addr.is_none() {
            debug!(bin = %self.bin_path.display(), "address tool printed nothing");
        }
        addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_address_line() {
        assert_eq!(
            first_address_line("100.64.1.2\n"),
            Some("100.64.1.2".to_string())
        );
        assert_eq!(
            first_address_line("\n  \n100.64.1.3\n100.64.1.4\n"),
            Some("100.64.1.3".to_string())
        );
        assert_eq!(first_address_line(""), None);
        assert_eq!(first_address_line("\n\n"), None);
    }

    #[tokio::test]
    async fn test_missing_binary_yields_none() {
        let resolver = TailscaleResolver::new("/nonexistent/rovenchat-test/tailscale");
        assert_eq!(resolver.resolve_ipv4().await, None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_reads_first_line_from_script() {
        let dir = tempfile::tempdir().unwrap();
        let bin = crate::adapters::tools::test_support::write_script(
            dir.path(),
            "tailscale",
            "#!/bin/sh\n[ \"$1\" = ip ] && [ \"$2\" = -4 ] || exit 3\nprintf '100.64.1.2\\nfd7a::1\\n'\n",
        );
        let resolver = TailscaleResolver::new(&bin);
        assert_eq!(resolver.resolve_ipv4().await, Some("100.64.1.2".into()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_tool_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let bin = crate::adapters::tools::test_support::write_script(
            dir.path(),
            "tailscale",
            "#!/bin/sh\necho 100.64.9.9\nexit 1\n",
        );
        let resolver = TailscaleResolver::new(&bin);
        assert_eq!(resolver.resolve_ipv4().await, None);
    }
}
