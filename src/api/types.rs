//! Wire types for the doc.holiday jobs API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::changeset::ChangeSpecification;

/// Event kind reported to doc.holiday for smart-mode jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Release,
    Merge,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Release => "release",
            EventType::Merge => "merge",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/v1/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub doc_request: DocRequest,
}

/// The documentation request carried inside a [`JobRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocRequest {
    pub title: String,
    pub body: String,
    /// `owner/repo`
    pub source_connection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<ChangeSpecification>,
}

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Requested,
    Running,
    Done,
    Errored,
}

impl JobState {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Requested => "requested",
            JobState::Running => "running",
            JobState::Done => "done",
            JobState::Errored => "errored",
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job as returned by the service on creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub org_id: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub state: JobState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_request() -> JobRequest {
        JobRequest {
            doc_request: DocRequest {
                title: "Release notes for v1.2.0".into(),
                body: "Highlights".into(),
                source_connection: "acme/widgets".into(),
                publications: None,
                labels: None,
                comments: None,
                relevant_links: None,
                event_type: None,
                changes: vec![],
            },
        }
    }

    #[test]
    fn test_minimal_request_omits_optional_fields() {
        let value = serde_json::to_value(minimal_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "docRequest": {
                    "title": "Release notes for v1.2.0",
                    "body": "Highlights",
                    "sourceConnection": "acme/widgets"
                }
            })
        );
    }

    #[test]
    fn test_full_request_field_names() {
        let mut request = minimal_request();
        request.doc_request.publications = Some(vec!["docs".into()]);
        request.doc_request.relevant_links = Some(vec!["https://example.com".into()]);
        request.doc_request.event_type = Some(EventType::Release);
        request.doc_request.changes = vec![ChangeSpecification::ReleasesCount { count: 2 }];

        let value = serde_json::to_value(request).unwrap();
        let doc = &value["docRequest"];
        assert_eq!(doc["publications"], json!(["docs"]));
        assert_eq!(doc["relevantLinks"], json!(["https://example.com"]));
        assert_eq!(doc["eventType"], json!("release"));
        assert_eq!(doc["changes"], json!([{ "releases": { "count": 2 } }]));
    }

    #[test]
    fn test_job_record_deserialize() {
        let record: JobRecord = serde_json::from_str(
            r#"{"id":"job_123","orgId":"org_9","type":"docRequest","state":"requested"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "job_123");
        assert_eq!(record.org_id, "org_9");
        assert_eq!(record.job_type, "docRequest");
        assert_eq!(record.state, JobState::Requested);
    }

    #[test]
    fn test_job_record_rejects_unknown_state() {
        let result = serde_json::from_str::<JobRecord>(
            r#"{"id":"job_123","orgId":"org_9","type":"docRequest","state":"paused"}"#,
        );
        assert!(result.is_err());
    }
}
