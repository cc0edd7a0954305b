#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::cert::MAX_VALIDITY_DAYS;
use crate::core::provisioner::{cert_path, key_path, GOROUTER_CONFIG_DIR};
use crate::core::ProvisionRequest;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_domain, validate_non_empty_string, validate_path, validate_positive_number,
    validate_range, Validate,
};
use std::time::Duration;

/// Everything one provisioning run needs, after merging the config file with CLI flags.
#[derive(Debug, Clone)]
pub struct ProvisionSettings {
    pub request: ProvisionRequest,
    pub organization: String,
    pub validity_days: u32,
    pub script_timeout: Option<Duration>,
    pub verbose: bool,
    pub log_json: bool,
    pub dry_run: bool,
}

impl ProvisionSettings {
    /// Steps a run would take, one line each, as printed by `--dry-run`.
    pub fn plan(&self) -> Vec<String> {
        let request = &self.request;
        let run = match self.script_timeout {
            Some(timeout) => format!(
                "5. Run {} {} (timeout {}s)",
                request.script_path,
                request.domain,
                timeout.as_secs()
            ),
            None => format!("5. Run {} {}", request.script_path, request.domain),
        };

        vec![
            format!(
                "1. Generate certificate for *.{} (O={}, {} days)",
                request.domain, self.organization, self.validity_days
            ),
            format!("2. Create {}", GOROUTER_CONFIG_DIR),
            format!("3. Write {}", cert_path().display()),
            format!("4. Write {}", key_path().display()),
            run,
            format!("6. Print login help for {}", request.domain),
        ]
    }
}

impl Validate for ProvisionRequest {
    fn validate(&self) -> Result<()> {
        validate_path("script_path", &self.script_path)?;
        validate_domain("domain", &self.domain)
    }
}

impl Validate for ProvisionSettings {
    fn validate(&self) -> Result<()> {
        self.request.validate()?;
        validate_non_empty_string("certificate.organization", &self.organization)?;
        validate_range("certificate.validity_days", self.validity_days, 1, MAX_VALIDITY_DAYS)?;

        if let Some(timeout) = self.script_timeout {
            validate_positive_number("script.timeout_seconds", timeout.as_secs(), 1)?;
        }

        Ok(())
    }
}
