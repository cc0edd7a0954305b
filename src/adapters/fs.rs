use crate::core::FileSystem;
use crate::utils::error::{ProvisionError, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncRead, AsyncWriteExt};

/// Local disk access. Absolute paths are resolved under `root`, which is `/`
/// on a real VM and a staging directory otherwise.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self::with_root("/")
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps `path` under the root. `..` components are refused so nothing resolves outside it.
    pub fn resolve(&self, path: &Path) -> std::io::Result<PathBuf> {
        let mut relative = PathBuf::new();
        for component in path.components() {
            match component {
                Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
                Component::ParentDir => {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("path {} escapes {}", path.display(), self.root.display()),
                    ));
                }
                Component::Normal(part) => relative.push(part),
            }
        }
        Ok(self.root.join(relative))
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    /// Creates the directory and any missing parents. An existing directory is not an error.
    async fn mkdir(&self, path: &Path) -> Result<()> {
        let full_path = self.resolve(path).map_err(ProvisionError::CreateDirError)?;
        tracing::debug!("Creating directory {}", full_path.display());

        fs::create_dir_all(&full_path)
            .await
            .map_err(ProvisionError::CreateDirError)
    }

    async fn write(&self, path: &Path, content: &mut (dyn AsyncRead + Unpin + Send)) -> Result<()> {
        let full_path = self.resolve(path).map_err(ProvisionError::WriteFileError)?;

        let mut file = fs::File::create(&full_path)
            .await
            .map_err(ProvisionError::WriteFileError)?;
        let written = tokio::io::copy(content, &mut file)
            .await
            .map_err(ProvisionError::WriteFileError)?;
        file.flush().await.map_err(ProvisionError::WriteFileError)?;

        tracing::debug!("Wrote {} bytes to {}", written, full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_reroots_absolute_paths() {
        let fs = LocalFileSystem::with_root("/tmp/stage");

        assert_eq!(
            fs.resolve(Path::new("/var/vcap/jobs/gorouter/config/cert.pem"))
                .unwrap(),
            PathBuf::from("/tmp/stage/var/vcap/jobs/gorouter/config/cert.pem")
        );
        assert_eq!(
            LocalFileSystem::new().resolve(Path::new("/var/vcap")).unwrap(),
            PathBuf::from("/var/vcap")
        );
    }

    #[test]
    fn test_resolve_refuses_parent_components() {
        let fs = LocalFileSystem::with_root("/tmp/stage");

        let err = fs.resolve(Path::new("/var/../../etc/passwd")).unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_write_outside_root_fails_without_touching_disk() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("vm");
        let fs = LocalFileSystem::with_root(&root);

        let err = fs
            .write(Path::new("/../escaped.pem"), &mut b"some-key".as_slice())
            .await
            .unwrap_err();

        assert!(matches!(err, ProvisionError::WriteFileError(_)));
        assert!(!temp_dir.path().join("escaped.pem").exists());

        let err = fs.mkdir(Path::new("/../escaped")).await.unwrap_err();
        assert!(matches!(err, ProvisionError::CreateDirError(_)));
    }

    #[tokio::test]
    async fn test_mkdir_creates_parents_and_tolerates_existing() {
        let temp_dir = TempDir::new().unwrap();
        let fs = LocalFileSystem::with_root(temp_dir.path());
        let dir = Path::new("/var/vcap/jobs/gorouter/config");

        fs.mkdir(dir).await.unwrap();
        fs.mkdir(dir).await.unwrap();

        assert!(temp_dir.path().join("var/vcap/jobs/gorouter/config").is_dir());
    }

    #[tokio::test]
    async fn test_write_streams_content_and_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let fs = LocalFileSystem::with_root(temp_dir.path());
        let path = Path::new("/cert.pem");

        fs.write(path, &mut b"a much longer first version".as_slice())
            .await
            .unwrap();
        fs.write(path, &mut b"some-cert".as_slice()).await.unwrap();

        let content = std::fs::read(temp_dir.path().join("cert.pem")).unwrap();
        assert_eq!(content, b"some-cert");
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let fs = LocalFileSystem::with_root(temp_dir.path());

        let err = fs
            .write(Path::new("/missing/key.pem"), &mut b"some-key".as_slice())
            .await
            .unwrap_err();

        assert!(matches!(err, ProvisionError::WriteFileError(_)));
    }

    #[tokio::test]
    async fn test_mkdir_over_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config"), b"").unwrap();
        let fs = LocalFileSystem::with_root(temp_dir.path());

        let err = fs.mkdir(Path::new("/config")).await.unwrap_err();

        assert!(matches!(err, ProvisionError::CreateDirError(_)));
    }
}
