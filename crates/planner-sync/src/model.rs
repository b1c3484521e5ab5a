use serde::Serialize;

/// One row of the master planner spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerRecord {
    pub name: String,
    pub url: String,
}

/// A file in the remote report folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub name: String,
    pub unique_id: String,
    pub server_relative_url: String,
}

impl RemoteFile {
    /// The file name with the report extension stripped, used as the
    /// comparison key against planner names. A name without the suffix is
    /// compared unchanged.
    pub fn base_name(&self) -> &str {
        self.name
            .strip_suffix(crate::process::REPORT_EXTENSION)
            .unwrap_or(&self.name)
    }
}

/// Queue payload, taken verbatim from a planner record.
#[derive(Debug, Serialize)]
pub struct QueuePayload<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "URL")]
    pub url: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> RemoteFile {
        RemoteFile {
            name: name.to_owned(),
            unique_id: "id".to_owned(),
            server_relative_url: format!("Shared Documents/PowerBi/{name}"),
        }
    }

    #[test]
    fn base_name_strips_the_report_extension() {
        assert_eq!(file("Budget2024.xlsx").base_name(), "Budget2024");
    }

    #[test]
    fn base_name_leaves_other_names_unchanged() {
        assert_eq!(file("Budget2024").base_name(), "Budget2024");
        assert_eq!(file("notes.txt").base_name(), "notes.txt");
    }

    #[test]
    fn payload_serializes_with_upper_case_keys() {
        let payload = QueuePayload {
            name: "Budget2024",
            url: "http://a",
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"Name":"Budget2024","URL":"http://a"}"#);
    }
}
