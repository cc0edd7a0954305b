use crate::core::{CertGenerator, CommandRunner, FileSystem, UserNotifier};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Gorouter job configuration directory of the BOSH job layout on the VM.
pub const GOROUTER_CONFIG_DIR: &str = "/var/vcap/jobs/gorouter/config";
pub const CERT_FILE_NAME: &str = "cert.pem";
pub const KEY_FILE_NAME: &str = "key.pem";

pub fn cert_path() -> PathBuf {
    Path::new(GOROUTER_CONFIG_DIR).join(CERT_FILE_NAME)
}

pub fn key_path() -> PathBuf {
    Path::new(GOROUTER_CONFIG_DIR).join(KEY_FILE_NAME)
}

/// Issues a certificate for a domain, installs it for the gorouter, runs the
/// provision script and tells the operator how to log in.
///
/// Every step must succeed before the next one starts. The first error is
/// returned as-is and nothing written so far is cleaned up.
pub struct Provisioner<G, F, R, N>
where
    G: CertGenerator,
    F: FileSystem,
    R: CommandRunner,
    N: UserNotifier,
{
    cert: G,
    fs: F,
    cmd_runner: R,
    ui: N,
}

impl<G, F, R, N> Provisioner<G, F, R, N>
where
    G: CertGenerator,
    F: FileSystem,
    R: CommandRunner,
    N: UserNotifier,
{
    pub fn new(cert: G, fs: F, cmd_runner: R, ui: N) -> Self {
        Self {
            cert,
            fs,
            cmd_runner,
            ui,
        }
    }

    pub async fn provision(&self, script_path: &str, domain: &str) -> Result<()> {
        let material = self.cert.generate_cert(domain).await?;

        self.fs.mkdir(Path::new(GOROUTER_CONFIG_DIR)).await?;
        self.fs.write(&cert_path(), &mut material.cert.as_slice()).await?;
        self.fs.write(&key_path(), &mut material.key.as_slice()).await?;

        self.cmd_runner.run(script_path, &[domain]).await?;

        self.ui.print_help_text(domain).await
    }
}
