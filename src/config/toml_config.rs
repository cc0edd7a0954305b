use crate::adapters::cert::{DEFAULT_ORGANIZATION, DEFAULT_VALIDITY_DAYS, MAX_VALIDITY_DAYS};
use crate::utils::error::{ProvisionError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub certificate: Option<CertificateConfig>,
    pub script: Option<ScriptConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateConfig {
    pub organization: Option<String>,
    pub validity_days: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ProvisionError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProvisionError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; undefined variables are left as-is
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProvisionError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn organization(&self) -> &str {
        self.certificate
            .as_ref()
            .and_then(|c| c.organization.as_deref())
            .unwrap_or(DEFAULT_ORGANIZATION)
    }

    pub fn validity_days(&self) -> u32 {
        self.certificate
            .as_ref()
            .and_then(|c| c.validity_days)
            .unwrap_or(DEFAULT_VALIDITY_DAYS)
    }

    /// Script timeout, unbounded when unset
    pub fn script_timeout(&self) -> Option<Duration> {
        self.script
            .as_ref()
            .and_then(|s| s.timeout_seconds)
            .map(Duration::from_secs)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("certificate.organization", self.organization())?;
        validate_range(
            "certificate.validity_days",
            self.validity_days(),
            1,
            MAX_VALIDITY_DAYS,
        )?;

        if let Some(timeout) = self.script.as_ref().and_then(|s| s.timeout_seconds) {
            validate_positive_number("script.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
