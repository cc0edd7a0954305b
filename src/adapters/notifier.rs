use crate::core::UserNotifier;
use crate::utils::error::{ProvisionError, Result};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

pub fn help_text(domain: &str) -> String {
    format!(
        "PCF Dev is now running.\n\
         To begin using PCF Dev, please run:\n   \
         cf login -a https://api.{domain} --skip-ssl-validation\n\
         Apps Manager URL: https://{domain}\n\
         Admin user => Email: admin / Password: admin\n\
         Regular user => Email: user / Password: pass\n"
    )
}

/// Prints operator help text to a writer, stdout in the binary.
pub struct ConsoleNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> UserNotifier for ConsoleNotifier<W> {
    async fn print_help_text(&self, domain: &str) -> Result<()> {
        let mut out = self.out.lock().map_err(|_| {
            ProvisionError::NotificationError(std::io::Error::other("output writer is poisoned"))
        })?;

        out.write_all(help_text(domain).as_bytes())
            .and_then(|_| out.flush())
            .map_err(ProvisionError::NotificationError)
    }
}
