use crate::utils::error::{ProvisionError, Result};
use url::Host;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_domain(field_name: &str, domain: &str) -> Result<()> {
    validate_non_empty_string(field_name, domain)?;

    match Host::parse(domain) {
        Ok(Host::Domain(_)) => Ok(()),
        Ok(_) => Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: "Expected a DNS name, not an IP address".to_string(),
        }),
        Err(e) => Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: format!("Invalid domain: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain() {
        assert!(validate_domain("domain", "local.pcfdev.io").is_ok());
        assert!(validate_domain("domain", "some-domain").is_ok());
        assert!(validate_domain("domain", "").is_err());
        assert!(validate_domain("domain", "   ").is_err());
        assert!(validate_domain("domain", "192.168.11.11").is_err());
        assert!(validate_domain("domain", "bad domain").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("script_path", "/var/pcfdev/provision.sh").is_ok());
        assert!(validate_path("script_path", "").is_err());
        assert!(validate_path("script_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("certificate.validity_days", 365, 1).is_ok());
        assert!(validate_positive_number("certificate.validity_days", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("certificate.validity_days", 365, 1, 36_500).is_ok());
        assert!(validate_range("certificate.validity_days", 0, 1, 36_500).is_err());
        assert!(validate_range("certificate.validity_days", 3_000_000, 1, 36_500).is_err());
    }
}
