pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{ProvisionSettings, TomlConfig};

pub use adapters::{ConsoleNotifier, LocalFileSystem, ProcessRunner, SelfSignedCertGenerator};
pub use crate::core::provisioner::{Provisioner, GOROUTER_CONFIG_DIR};
pub use utils::error::{ProvisionError, Result};
