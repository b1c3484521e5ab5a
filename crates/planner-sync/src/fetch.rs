use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::site::{SiteClient, SiteError};

/// Errors while fetching a remote file to the local filesystem.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not resolve a user document directory")]
    NoDocumentDir,

    #[error(
        "file not found at {} after waiting for {} seconds",
        path.display(),
        waited.as_secs()
    )]
    Timeout { path: PathBuf, waited: Duration },
}

/// Filesystem roots and polling bounds for the fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Where the downloaded file is written. `None` means the current
    /// working directory.
    pub download_dir: Option<PathBuf>,
    /// Root under which the remote folder layout is mirrored. `None` means
    /// the user's document directory.
    pub documents_root: Option<PathBuf>,
    pub poll_interval: Duration,
    pub wait_ceiling: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            documents_root: None,
            poll_interval: Duration::from_secs(1),
            wait_ceiling: Duration::from_secs(60),
        }
    }
}

/// Download a remote file and return its local path.
///
/// Handles both cases where subfolders exist or only the document library
/// root is used. The destination is polled into existence because
/// sync-client layers may surface the bytes asynchronously after the
/// download call returns.
pub async fn fetch(
    client: &dyn SiteClient,
    server_relative_path: &str,
    config: &FetchConfig,
) -> Result<PathBuf, FetchError> {
    let file_name = server_relative_path
        .rsplit('/')
        .next()
        .unwrap_or(server_relative_path);

    let documents_root = match &config.documents_root {
        Some(root) => root.clone(),
        None => dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .ok_or(FetchError::NoDocumentDir)?,
    };
    std::fs::create_dir_all(mirror_dir(&documents_root, server_relative_path))?;

    // TODO: the file lands in download_dir while the mirror directory above
    // goes unused and is never cleaned up; confirm which location the
    // downstream consumers actually read before unifying the two.
    let download_dir = match &config.download_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let download_path = download_dir.join(file_name);

    let bytes = client.download(server_relative_path).await?;
    std::fs::write(&download_path, bytes)?;

    wait_for(&download_path, config.poll_interval, config.wait_ceiling).await?;

    info!(path = %download_path.display(), "file downloaded");
    Ok(download_path)
}

/// Local directory mirroring the remote folder layout: the subfolder chain
/// when one exists, otherwise the document library name itself.
fn mirror_dir(documents_root: &Path, server_relative_path: &str) -> PathBuf {
    let parts: Vec<&str> = server_relative_path.split('/').collect();
    if parts.len() > 2 {
        documents_root.join(parts[1..parts.len() - 1].join("/"))
    } else {
        documents_root.join(parts.first().copied().unwrap_or_default())
    }
}

/// Poll for a path's existence at `interval` up to `ceiling` total wait.
async fn wait_for(path: &Path, interval: Duration, ceiling: Duration) -> Result<(), FetchError> {
    let mut waited = Duration::ZERO;
    while !path.exists() && waited < ceiling {
        tokio::time::sleep(interval).await;
        waited += interval;
    }

    if !path.exists() {
        return Err(FetchError::Timeout {
            path: path.to_owned(),
            waited: ceiling,
        });
    }

    Ok(())
}
