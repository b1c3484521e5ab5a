use planner_sync::site::{SiteClient, SiteError};
use planner_sync_sharepoint::SharePointClient;
use wiremock::matchers::{basic_auth, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_web_fixture(server: &MockServer) {
    let fixture = include_str!("fixtures/web_response.json");

    Mock::given(method("GET"))
        .and(path("/_api/web"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fixture, "application/json"))
        .mount(server)
        .await;
}

async fn connect(server: &MockServer) -> SharePointClient {
    SharePointClient::connect("robot@example.org", "hunter2", &server.uri())
        .await
        .unwrap()
}

#[tokio::test]
async fn connect_verifies_the_session_and_reads_the_site_title() {
    let server = MockServer::start().await;

    let fixture = include_str!("fixtures/web_response.json");
    Mock::given(method("GET"))
        .and(path("/_api/web"))
        .and(basic_auth("robot@example.org", "hunter2"))
        .and(header("Accept", "application/json;odata=nometadata"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fixture, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    assert_eq!(client.site_title(), "Planner PowerBI");
}

#[tokio::test]
async fn connect_rejects_bad_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_api/web"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = SharePointClient::connect("robot@example.org", "wrong", &server.uri()).await;
    assert!(matches!(result, Err(SiteError::Auth(_))));
}

#[tokio::test]
async fn connect_treats_server_errors_as_auth_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_api/web"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = SharePointClient::connect("robot@example.org", "hunter2", &server.uri()).await;
    assert!(matches!(result, Err(SiteError::Auth(_))));
}

#[tokio::test]
async fn list_files_parses_folder_entries() {
    let server = MockServer::start().await;
    mount_web_fixture(&server).await;

    let fixture = include_str!("fixtures/folder_files.json");
    Mock::given(method("GET"))
        .and(path(
            "/_api/web/GetFolderByServerRelativeUrl('Documents/PowerBi')/Files",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fixture, "application/json"))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let files = client.list_files("Documents/PowerBi").await.unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "Budget2024.xlsx");
    assert_eq!(files[0].unique_id, "7c9e6679-7425-40de-944b-e07fc1f90ae7");
    assert_eq!(
        files[1].server_relative_url,
        "/teams/PlannerPowerBI/Documents/PowerBi/Old.xlsx"
    );
}

#[tokio::test]
async fn list_files_maps_failures_to_remote_errors() {
    let server = MockServer::start().await;
    mount_web_fixture(&server).await;

    Mock::given(method("GET"))
        .and(path(
            "/_api/web/GetFolderByServerRelativeUrl('Documents/Missing')/Files",
        ))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let result = client.list_files("Documents/Missing").await;
    assert!(matches!(result, Err(SiteError::Remote(_))));
}

#[tokio::test]
async fn delete_file_issues_one_flushed_round_trip() {
    let server = MockServer::start().await;
    mount_web_fixture(&server).await;

    Mock::given(method("DELETE"))
        .and(path(
            "/_api/web/GetFileByServerRelativeUrl('Documents/PowerBi/Old.xlsx')",
        ))
        .and(header("IF-MATCH", "*"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    client
        .delete_file("Documents/PowerBi/Old.xlsx")
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_file_propagates_refusals() {
    let server = MockServer::start().await;
    mount_web_fixture(&server).await;

    Mock::given(method("DELETE"))
        .and(path(
            "/_api/web/GetFileByServerRelativeUrl('Documents/PowerBi/Locked.xlsx')",
        ))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let result = client.delete_file("Documents/PowerBi/Locked.xlsx").await;
    assert!(matches!(result, Err(SiteError::Remote(_))));
}

#[tokio::test]
async fn download_returns_the_file_bytes() {
    let server = MockServer::start().await;
    mount_web_fixture(&server).await;

    Mock::given(method("GET"))
        .and(path(
            "/_api/web/GetFileByServerRelativeUrl('Documents/PlannerListe.xlsx')/$value",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"workbook-bytes".to_vec()))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let bytes = client.download("Documents/PlannerListe.xlsx").await.unwrap();
    assert_eq!(bytes, b"workbook-bytes");
}

#[tokio::test]
async fn download_of_a_missing_file_is_a_remote_error() {
    let server = MockServer::start().await;
    mount_web_fixture(&server).await;

    Mock::given(method("GET"))
        .and(path(
            "/_api/web/GetFileByServerRelativeUrl('Documents/Missing.xlsx')/$value",
        ))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let result = client.download("Documents/Missing.xlsx").await;
    assert!(matches!(result, Err(SiteError::Remote(_))));
}
