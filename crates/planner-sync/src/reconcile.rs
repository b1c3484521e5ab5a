use std::collections::HashSet;

use tracing::info;

use crate::model::{PlannerRecord, RemoteFile};
use crate::site::{SiteClient, SiteError};

/// Outcome of one reconciliation sweep.
#[derive(Debug, Default)]
pub struct ReconcileReport {
    /// The files removed from the report folder, in evaluation order.
    pub deleted: Vec<RemoteFile>,
}

/// Delete every file in the report folder whose base name no longer
/// matches a planner record.
///
/// Deletions are issued one at a time, each flushed before the next file
/// is evaluated. The first failed delete aborts the sweep; there is no
/// best-effort continue.
pub async fn reconcile(
    client: &dyn SiteClient,
    records: &[PlannerRecord],
    report_folder: &str,
) -> Result<ReconcileReport, SiteError> {
    let valid: HashSet<&str> = records.iter().map(|record| record.name.as_str()).collect();

    let files = client.list_files(report_folder).await?;

    let mut report = ReconcileReport::default();
    for file in files {
        if valid.contains(file.base_name()) {
            continue;
        }

        info!(name = %file.name, id = %file.unique_id, "deleting stale report");
        client.delete_file(&file.server_relative_url).await?;
        report.deleted.push(file);
    }

    Ok(report)
}
