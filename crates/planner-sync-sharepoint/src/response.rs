use planner_sync::model::RemoteFile;
use serde::Deserialize;

/// Response from the site verification call.
/// `GET {site}/_api/web?$select=Title` (nometadata payload)
#[derive(Debug, Deserialize)]
pub struct WebResponse {
    #[serde(rename = "Title")]
    pub title: String,
}

/// Response from a folder listing.
/// `GET {site}/_api/web/GetFolderByServerRelativeUrl('{path}')/Files`
#[derive(Debug, Deserialize)]
pub struct FolderFilesResponse {
    pub value: Vec<FileEntry>,
}

/// One file entry in a folder listing.
#[derive(Debug, Deserialize)]
pub struct FileEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "UniqueId")]
    pub unique_id: String,
    #[serde(rename = "ServerRelativeUrl")]
    pub server_relative_url: String,
}

impl From<FileEntry> for RemoteFile {
    fn from(entry: FileEntry) -> Self {
        RemoteFile {
            name: entry.name,
            unique_id: entry.unique_id,
            server_relative_url: entry.server_relative_url,
        }
    }
}
