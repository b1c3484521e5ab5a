use anyhow::Result;
use planner_sync::fetch::FetchConfig;
use planner_sync::orchestrator::Orchestrator;
use planner_sync::process::{CREDENTIAL_NAME, RunReport, SITE_CONSTANT, SITE_PATH, run};
use planner_sync_sharepoint::SharePointClient;

/// Entry operation for one scheduled run: look up the robot credentials and
/// the site constant, connect, and drive a full reconciliation pass.
pub async fn process(connection: &dyn Orchestrator) -> Result<RunReport> {
    let credential = connection.get_credential(CREDENTIAL_NAME).await?;
    let site_base = connection.get_constant(SITE_CONSTANT).await?;
    let site_url = format!("{site_base}{SITE_PATH}");

    let client =
        SharePointClient::connect(&credential.username, &credential.password, &site_url).await?;
    println!(
        "Authenticated successfully. Site title: {}",
        client.site_title()
    );

    let report = run(connection, &client, &FetchConfig::default()).await?;
    Ok(report)
}
