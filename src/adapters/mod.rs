// Adapters layer: concrete collaborators for certificates, disk, processes and the console.

pub mod cert;
pub mod fs;
pub mod notifier;
pub mod runner;

pub use cert::SelfSignedCertGenerator;
pub use fs::LocalFileSystem;
pub use notifier::ConsoleNotifier;
pub use runner::ProcessRunner;
