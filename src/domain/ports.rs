use crate::domain::model::CertificateMaterial;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio::io::AsyncRead;

#[async_trait]
pub trait CertGenerator: Send + Sync {
    async fn generate_cert(&self, domain: &str) -> Result<CertificateMaterial>;
}

#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn mkdir(&self, path: &Path) -> Result<()>;
    async fn write(&self, path: &Path, content: &mut (dyn AsyncRead + Unpin + Send)) -> Result<()>;
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, path: &str, args: &[&str]) -> Result<()>;
}

#[async_trait]
pub trait UserNotifier: Send + Sync {
    async fn print_help_text(&self, domain: &str) -> Result<()>;
}
