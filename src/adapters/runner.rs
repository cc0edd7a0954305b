use crate::core::CommandRunner;
use crate::utils::error::{ProvisionError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Runs an executable to completion with the operator's stdout/stderr attached.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Kills the process and fails once `timeout` has elapsed.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, path: &str, args: &[&str]) -> Result<()> {
        tracing::debug!("Running {} {}", path, args.join(" "));

        let mut child = Command::new(path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ProvisionError::execution(e.to_string()))?;

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status,
                Err(_) => {
                    if let Err(e) = child.kill().await {
                        tracing::warn!("Failed to kill {} after timeout: {}", path, e);
                    }
                    return Err(ProvisionError::execution(format!(
                        "timed out after {} seconds",
                        limit.as_secs()
                    )));
                }
            },
            None => child.wait().await,
        }
        .map_err(|e| ProvisionError::execution(e.to_string()))?;

        tracing::debug!("{} finished with {}", path, status);

        if status.success() {
            Ok(())
        } else {
            Err(ProvisionError::execution(status.to_string()))
        }
    }
}
