/// A username/password pair from the orchestrator's credential store.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// Errors from the orchestrating host.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("credential lookup failed for {name}: {reason}")]
    Credential { name: String, reason: String },

    #[error("constant lookup failed for {name}: {reason}")]
    Constant { name: String, reason: String },

    #[error("queue submission failed: {0}")]
    Queue(String),
}

/// Capabilities the run needs from its orchestrating host.
///
/// The workflow never talks to a specific host runtime directly; credential
/// lookup, constant lookup, and queue submission all go through this trait.
#[async_trait::async_trait]
pub trait Orchestrator: Send + Sync {
    /// Look up a credential by its logical name.
    async fn get_credential(&self, name: &str) -> Result<Credential, OrchestratorError>;

    /// Look up a named constant's value.
    async fn get_constant(&self, name: &str) -> Result<String, OrchestratorError>;

    /// Persist one queue element per (reference, payload) pair.
    ///
    /// The two slices are positionally paired and must have the same
    /// length; index `i`'s reference belongs to index `i`'s payload.
    async fn bulk_enqueue(
        &self,
        queue: &str,
        references: &[String],
        payloads: &[String],
    ) -> Result<(), OrchestratorError>;

    /// Trace-level breadcrumb into the host's run log. Best effort.
    fn log_trace(&self, _message: &str) {}
}
