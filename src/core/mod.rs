pub mod provisioner;

pub use crate::domain::model::{CertificateMaterial, ProvisionRequest};
pub use crate::domain::ports::{CertGenerator, CommandRunner, FileSystem, UserNotifier};
pub use crate::utils::error::Result;
