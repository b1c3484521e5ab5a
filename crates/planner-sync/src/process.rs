use tracing::info;

use crate::fetch::{FetchConfig, FetchError, fetch};
use crate::model::{QueuePayload, RemoteFile};
use crate::orchestrator::{Orchestrator, OrchestratorError};
use crate::reconcile::{ReconcileReport, reconcile};
use crate::sheet::{SheetError, read_planner_sheet};
use crate::site::{SiteClient, SiteError};

/// Logical credential name in the orchestrator's store.
pub const CREDENTIAL_NAME: &str = "Robot365User";
/// Constant holding the base site URL prefix.
pub const SITE_CONSTANT: &str = "AarhusKommuneSharePoint";
/// Fixed relative segment appended to the base URL to form the site URL.
pub const SITE_PATH: &str = "/teams/PlannerPowerBI";
/// Server-relative path of the master spreadsheet.
pub const SPREADSHEET_PATH: &str = "Shared Documents/PlannerListe.xlsx";
/// Sheet holding one row per planner.
pub const SHEET_NAME: &str = "PlannerListe";
/// Header of the planner-name column.
pub const NAME_COLUMN: &str = "PlannerNavn";
/// Header of the source-URL column.
pub const URL_COLUMN: &str = "URL";
/// Server-relative folder holding the generated report files.
pub const REPORT_FOLDER: &str = "Shared Documents/PowerBi";
/// Extension the report files carry.
pub const REPORT_EXTENSION: &str = ".xlsx";
/// Queue receiving one element per planner row.
pub const QUEUE_NAME: &str = "PlannerRefresh";

/// Any failure in one run. Every step's error propagates unmodified; there
/// is no local recovery and no cleanup on failure.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Summary of one completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Stale report files removed by the reconciler.
    pub deleted: Vec<RemoteFile>,
    /// Queue elements submitted, one per spreadsheet row.
    pub enqueued: usize,
}

/// One full pass: fetch the planner list, reconcile the report folder
/// against it, and enqueue a refresh element per planner row.
pub async fn run(
    connection: &dyn Orchestrator,
    client: &dyn SiteClient,
    fetch_config: &FetchConfig,
) -> Result<RunReport, ProcessError> {
    connection.log_trace("Running process.");

    let local_path = fetch(client, SPREADSHEET_PATH, fetch_config).await?;
    let records = read_planner_sheet(&local_path)?;
    std::fs::remove_file(&local_path)?;

    let ReconcileReport { deleted } = reconcile(client, &records, REPORT_FOLDER).await?;

    // References and payloads stay in row order so positional pairing holds.
    let references: Vec<String> = records.iter().map(|record| record.name.clone()).collect();
    let payloads = records
        .iter()
        .map(|record| {
            serde_json::to_string(&QueuePayload {
                name: &record.name,
                url: &record.url,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    connection
        .bulk_enqueue(QUEUE_NAME, &references, &payloads)
        .await?;

    info!(
        deleted = deleted.len(),
        enqueued = references.len(),
        "run complete"
    );

    Ok(RunReport {
        deleted,
        enqueued: references.len(),
    })
}
