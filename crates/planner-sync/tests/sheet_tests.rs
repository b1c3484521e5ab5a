use std::path::PathBuf;

use planner_sync::model::PlannerRecord;
use planner_sync::sheet::{SheetError, read_planner_sheet};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn reads_rows_in_order() {
    let records = read_planner_sheet(&fixture("planner_liste.xlsx")).unwrap();

    assert_eq!(
        records,
        vec![
            PlannerRecord {
                name: "Budget2024".into(),
                url: "http://a".into(),
            },
            PlannerRecord {
                name: "Forecast".into(),
                url: "http://b".into(),
            },
        ]
    );
}

#[test]
fn skips_rows_without_a_name() {
    let records = read_planner_sheet(&fixture("gaps.xlsx")).unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}

#[test]
fn missing_url_column_is_a_schema_error() {
    let result = read_planner_sheet(&fixture("missing_url.xlsx"));

    match result {
        Err(SheetError::MissingColumn { column, .. }) => assert_eq!(column, "URL"),
        other => panic!("expected missing column error, got {other:?}"),
    }
}

#[test]
fn missing_sheet_is_an_error() {
    let result = read_planner_sheet(&fixture("wrong_sheet.xlsx"));
    assert!(matches!(result, Err(SheetError::MissingSheet(_))));
}

#[test]
fn unreadable_path_is_an_open_error() {
    let result = read_planner_sheet(&fixture("does_not_exist.xlsx"));
    assert!(matches!(result, Err(SheetError::Open { .. })));
}
