/// A freshly generated certificate and its private key, both PEM encoded.
///
/// Produced once per provisioning run and dropped after being written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateMaterial {
    pub cert: Vec<u8>,
    pub key: Vec<u8>,
}

impl CertificateMaterial {
    pub fn new(cert: impl Into<Vec<u8>>, key: impl Into<Vec<u8>>) -> Self {
        Self {
            cert: cert.into(),
            key: key.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    pub script_path: String,
    pub domain: String,
}
