use planner_sync::model::RemoteFile;
use planner_sync::site::{SiteClient, SiteError};
use tracing::info;

use crate::response::{FolderFilesResponse, WebResponse};

const ACCEPT_JSON: &str = "application/json;odata=nometadata";

/// Client for one SharePoint site, authenticated with user credentials.
///
/// All operations are single request/response round trips against the
/// site's REST API; nothing is batched and nothing is retried.
pub struct SharePointClient {
    http: reqwest::Client,
    site_url: String,
    username: String,
    password: String,
    site_title: String,
}

impl SharePointClient {
    /// Connect to a site and eagerly verify the session by reading the
    /// site title back, so credential problems surface here instead of on
    /// the first real operation.
    pub async fn connect(
        username: &str,
        password: &str,
        site_url: &str,
    ) -> Result<Self, SiteError> {
        let http = reqwest::Client::new();
        let site_url = site_url.trim_end_matches('/').to_owned();

        let url = format!("{site_url}/_api/web?$select=Title");
        let response = http
            .get(&url)
            .basic_auth(username, Some(password))
            .header("Accept", ACCEPT_JSON)
            .send()
            .await
            .map_err(|e| SiteError::Auth(format!("site unreachable: {e}")))?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SiteError::Auth(format!("credentials rejected: HTTP {status}")));
        }
        if !status.is_success() {
            return Err(SiteError::Auth(format!(
                "site verification returned HTTP {status}"
            )));
        }

        let web: WebResponse = response
            .json()
            .await
            .map_err(|e| SiteError::Auth(format!("unreadable site response: {e}")))?;

        info!(title = %web.title, "authenticated successfully");

        Ok(Self {
            http,
            site_url,
            username: username.to_owned(),
            password: password.to_owned(),
            site_title: web.title,
        })
    }

    /// The site title read back during connection.
    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", ACCEPT_JSON)
    }
}

#[async_trait::async_trait]
impl SiteClient for SharePointClient {
    async fn list_files(&self, folder_path: &str) -> Result<Vec<RemoteFile>, SiteError> {
        let url = format!(
            "{}/_api/web/GetFolderByServerRelativeUrl('{folder_path}')/Files",
            self.site_url
        );

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| SiteError::Remote(format!("folder listing failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SiteError::Remote(format!(
                "folder listing for {folder_path} returned HTTP {}",
                response.status()
            )));
        }

        let listing: FolderFilesResponse = response
            .json()
            .await
            .map_err(|e| SiteError::Remote(format!("unreadable folder listing: {e}")))?;

        Ok(listing.value.into_iter().map(RemoteFile::from).collect())
    }

    async fn delete_file(&self, server_relative_path: &str) -> Result<(), SiteError> {
        let url = format!(
            "{}/_api/web/GetFileByServerRelativeUrl('{server_relative_path}')",
            self.site_url
        );

        let response = self
            .http
            .delete(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header("IF-MATCH", "*")
            .send()
            .await
            .map_err(|e| SiteError::Remote(format!("delete failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SiteError::Remote(format!(
                "delete of {server_relative_path} returned HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn download(&self, server_relative_path: &str) -> Result<Vec<u8>, SiteError> {
        let url = format!(
            "{}/_api/web/GetFileByServerRelativeUrl('{server_relative_path}')/$value",
            self.site_url
        );

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| SiteError::Remote(format!("download failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SiteError::Remote(format!(
                "download of {server_relative_path} returned HTTP {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SiteError::Remote(format!("download body failed: {e}")))?;

        Ok(bytes.to_vec())
    }
}
