//! Self-signed certificate generation for the gorouter
//!
//! Issues a wildcard certificate covering `*.{domain}` and the bare domain,
//! signed by its own key so it can also be trusted as a CA by clients.

use crate::core::{CertGenerator, CertificateMaterial};
use crate::utils::error::{ProvisionError, Result};
use async_trait::async_trait;
use rcgen::{
    BasicConstraints, CertificateParams, DistinguishedName, DnType, ExtendedKeyUsagePurpose, IsCa,
    KeyPair, KeyUsagePurpose, SerialNumber,
};
use time::{Duration, OffsetDateTime};

pub const DEFAULT_ORGANIZATION: &str = "Cloud Foundry";
pub const DEFAULT_VALIDITY_DAYS: u32 = 365;
/// Upper bound on certificate lifetime, well inside the year 9999 limit of X.509 dates.
pub const MAX_VALIDITY_DAYS: u32 = 36_500;

#[derive(Debug, Clone)]
pub struct SelfSignedCertGenerator {
    organization: String,
    validity_days: u32,
}

impl SelfSignedCertGenerator {
    pub fn new(organization: impl Into<String>, validity_days: u32) -> Self {
        Self {
            organization: organization.into(),
            validity_days,
        }
    }

    fn params(&self, domain: &str) -> Result<CertificateParams> {
        let wildcard = format!("*.{}", domain);

        let mut params = CertificateParams::new(vec![wildcard.clone(), domain.to_string()])
            .map_err(|e| ProvisionError::certificate(e.to_string()))?;

        let mut dn = DistinguishedName::new();
        dn.push(DnType::CommonName, wildcard);
        dn.push(DnType::OrganizationName, self.organization.clone());
        params.distinguished_name = dn;

        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        params.key_usages = vec![
            KeyUsagePurpose::DigitalSignature,
            KeyUsagePurpose::KeyEncipherment,
            KeyUsagePurpose::KeyCertSign,
        ];
        params.extended_key_usages = vec![ExtendedKeyUsagePurpose::ServerAuth];

        let not_before = OffsetDateTime::now_utc();
        params.not_before = not_before;
        params.not_after = not_before
            .checked_add(Duration::days(i64::from(self.validity_days)))
            .ok_or_else(|| {
                ProvisionError::certificate(format!(
                    "validity of {} days is out of range",
                    self.validity_days
                ))
            })?;

        params.serial_number = Some(SerialNumber::from(rand::random::<u64>()));

        Ok(params)
    }
}

impl Default for SelfSignedCertGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ORGANIZATION, DEFAULT_VALIDITY_DAYS)
    }
}

#[async_trait]
impl CertGenerator for SelfSignedCertGenerator {
    async fn generate_cert(&self, domain: &str) -> Result<CertificateMaterial> {
        if domain.trim().is_empty() {
            return Err(ProvisionError::certificate(
                "cannot generate a certificate for an empty domain",
            ));
        }

        let params = self.params(domain)?;
        let key_pair = KeyPair::generate().map_err(|e| ProvisionError::certificate(e.to_string()))?;
        let cert = params
            .self_signed(&key_pair)
            .map_err(|e| ProvisionError::certificate(e.to_string()))?;

        tracing::debug!(
            "Generated self-signed certificate for *.{} valid for {} days",
            domain,
            self.validity_days
        );

        Ok(CertificateMaterial::new(cert.pem(), key_pair.serialize_pem()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_cert_returns_pem() {
        let generator = SelfSignedCertGenerator::default();

        let material = generator.generate_cert("local.pcfdev.io").await.unwrap();

        let cert = String::from_utf8(material.cert).unwrap();
        let key = String::from_utf8(material.key).unwrap();
        assert!(cert.starts_with("-----BEGIN CERTIFICATE-----"));
        assert!(key.contains("BEGIN PRIVATE KEY"));
    }

    #[tokio::test]
    async fn test_generate_cert_is_fresh_per_call() {
        let generator = SelfSignedCertGenerator::new("PCF Dev", 30);

        let first = generator.generate_cert("local.pcfdev.io").await.unwrap();
        let second = generator.generate_cert("local.pcfdev.io").await.unwrap();

        assert_ne!(first.key, second.key);
        assert_ne!(first.cert, second.cert);
    }

    #[tokio::test]
    async fn test_generate_cert_rejects_empty_domain() {
        let generator = SelfSignedCertGenerator::default();

        let err = generator.generate_cert("  ").await.unwrap_err();

        assert!(matches!(err, ProvisionError::CertificateError { .. }));
    }

    #[tokio::test]
    async fn test_out_of_range_validity_is_an_error() {
        let generator = SelfSignedCertGenerator::new(DEFAULT_ORGANIZATION, 3_000_000);

        let err = generator.generate_cert("local.pcfdev.io").await.unwrap_err();

        assert!(matches!(err, ProvisionError::CertificateError { .. }));
        assert_eq!(err.to_string(), "validity of 3000000 days is out of range");
    }

    #[test]
    fn test_params_cover_wildcard_and_bare_domain() {
        let generator = SelfSignedCertGenerator::default();

        let params = generator.params("local.pcfdev.io").unwrap();

        assert_eq!(params.subject_alt_names.len(), 2);
        assert!(matches!(params.is_ca, IsCa::Ca(_)));
        assert_eq!(
            params.not_after - params.not_before,
            Duration::days(i64::from(DEFAULT_VALIDITY_DAYS))
        );
    }
}
