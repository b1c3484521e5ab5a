use crate::model::RemoteFile;

/// Errors from the remote document site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("remote operation failed: {0}")]
    Remote(String),
}

/// A connected document-service site.
///
/// Implementations expose the folder and file operations one run needs.
/// Every call is a single round trip; no batching, no retry.
#[async_trait::async_trait]
pub trait SiteClient: Send + Sync {
    /// List the files directly under a server-relative folder.
    async fn list_files(&self, folder_path: &str) -> Result<Vec<RemoteFile>, SiteError>;

    /// Delete one file by server-relative path. The effect is flushed on
    /// the site before this returns.
    async fn delete_file(&self, server_relative_path: &str) -> Result<(), SiteError>;

    /// Download a file's bytes by server-relative path.
    async fn download(&self, server_relative_path: &str) -> Result<Vec<u8>, SiteError>;
}
