use crate::config::{ProvisionSettings, TomlConfig};
use crate::core::ProvisionRequest;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "pcfdev-provisioner")]
#[command(about = "Install a gorouter certificate for a domain and run the VM provision script")]
pub struct CliConfig {
    /// Provision script to run with the domain as its only argument
    pub script_path: String,

    /// Domain the VM is served under
    pub domain: String,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Kill the provision script after this many seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Dry run - show what would be done without touching the VM
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// Loads the config file, if any, and applies command line overrides on top.
    pub fn resolve(&self) -> Result<ProvisionSettings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        Ok(self.merge(&file))
    }

    fn merge(&self, file: &TomlConfig) -> ProvisionSettings {
        ProvisionSettings {
            request: ProvisionRequest {
                script_path: self.script_path.clone(),
                domain: self.domain.clone(),
            },
            organization: file.organization().to_string(),
            validity_days: file.validity_days(),
            script_timeout: self
                .timeout_seconds
                .map(Duration::from_secs)
                .or_else(|| file.script_timeout()),
            verbose: self.verbose || file.verbose(),
            log_json: self.log_json || file.log_json(),
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_arguments() {
        let cli = CliConfig::parse_from([
            "pcfdev-provisioner",
            "/var/pcfdev/provision.sh",
            "local.pcfdev.io",
        ]);

        let settings = cli.resolve().unwrap();

        assert_eq!(settings.request.script_path, "/var/pcfdev/provision.sh");
        assert_eq!(settings.request.domain, "local.pcfdev.io");
        assert_eq!(settings.script_timeout, None);
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[script]\ntimeout_seconds = 1800\n\n[certificate]\norganization = \"PCF Dev\"\n",
        )
        .unwrap();
        let cli = CliConfig::parse_from([
            "pcfdev-provisioner",
            "--timeout-seconds",
            "60",
            "--verbose",
            "provision.sh",
            "local.pcfdev.io",
        ]);

        let settings = cli.merge(&file);

        assert_eq!(settings.script_timeout, Some(Duration::from_secs(60)));
        assert_eq!(settings.organization, "PCF Dev");
        assert!(settings.verbose);
    }

    #[test]
    fn test_missing_domain_is_rejected() {
        assert!(CliConfig::try_parse_from(["pcfdev-provisioner", "provision.sh"]).is_err());
    }
}
