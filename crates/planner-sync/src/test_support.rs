use std::collections::HashMap;
use std::sync::Mutex;

use crate::model::RemoteFile;
use crate::orchestrator::{Credential, Orchestrator, OrchestratorError};
use crate::site::{SiteClient, SiteError};

/// In-memory site for tests. Serves file bytes and folder listings, and
/// records every delete it is asked to perform.
#[derive(Default)]
pub struct InMemorySite {
    files: HashMap<String, Vec<u8>>,
    folders: HashMap<String, Vec<RemoteFile>>,
    fail_delete: Option<String>,
    deleted: Mutex<Vec<String>>,
}

impl InMemorySite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, server_relative_path: &str, bytes: &[u8]) -> Self {
        self.files
            .insert(server_relative_path.to_owned(), bytes.to_vec());
        self
    }

    pub fn with_folder(mut self, folder_path: &str, files: Vec<RemoteFile>) -> Self {
        self.folders.insert(folder_path.to_owned(), files);
        self
    }

    /// Make `delete_file` fail for this server-relative path.
    pub fn failing_delete(mut self, server_relative_path: &str) -> Self {
        self.fail_delete = Some(server_relative_path.to_owned());
        self
    }

    /// Server-relative paths deleted so far, in call order.
    pub fn deleted_paths(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SiteClient for InMemorySite {
    async fn list_files(&self, folder_path: &str) -> Result<Vec<RemoteFile>, SiteError> {
        Ok(self.folders.get(folder_path).cloned().unwrap_or_default())
    }

    async fn delete_file(&self, server_relative_path: &str) -> Result<(), SiteError> {
        if self.fail_delete.as_deref() == Some(server_relative_path) {
            return Err(SiteError::Remote(format!(
                "delete refused: {server_relative_path}"
            )));
        }

        self.deleted
            .lock()
            .unwrap()
            .push(server_relative_path.to_owned());
        Ok(())
    }

    async fn download(&self, server_relative_path: &str) -> Result<Vec<u8>, SiteError> {
        self.files
            .get(server_relative_path)
            .cloned()
            .ok_or_else(|| SiteError::Remote(format!("no such file: {server_relative_path}")))
    }
}

/// One captured `bulk_enqueue` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnqueuedBatch {
    pub queue: String,
    pub references: Vec<String>,
    pub payloads: Vec<String>,
}

/// In-memory orchestrator connection for tests.
#[derive(Default)]
pub struct InMemoryOrchestrator {
    credentials: HashMap<String, Credential>,
    constants: HashMap<String, String>,
    batches: Mutex<Vec<EnqueuedBatch>>,
}

impl InMemoryOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(mut self, name: &str, username: &str, password: &str) -> Self {
        self.credentials.insert(
            name.to_owned(),
            Credential {
                username: username.to_owned(),
                password: password.to_owned(),
            },
        );
        self
    }

    pub fn with_constant(mut self, name: &str, value: &str) -> Self {
        self.constants.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Batches submitted so far, in call order.
    pub fn batches(&self) -> Vec<EnqueuedBatch> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Orchestrator for InMemoryOrchestrator {
    async fn get_credential(&self, name: &str) -> Result<Credential, OrchestratorError> {
        self.credentials
            .get(name)
            .cloned()
            .ok_or_else(|| OrchestratorError::Credential {
                name: name.to_owned(),
                reason: "not configured".to_owned(),
            })
    }

    async fn get_constant(&self, name: &str) -> Result<String, OrchestratorError> {
        self.constants
            .get(name)
            .cloned()
            .ok_or_else(|| OrchestratorError::Constant {
                name: name.to_owned(),
                reason: "not configured".to_owned(),
            })
    }

    async fn bulk_enqueue(
        &self,
        queue: &str,
        references: &[String],
        payloads: &[String],
    ) -> Result<(), OrchestratorError> {
        self.batches.lock().unwrap().push(EnqueuedBatch {
            queue: queue.to_owned(),
            references: references.to_vec(),
            payloads: payloads.to_vec(),
        });
        Ok(())
    }
}
