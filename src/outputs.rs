//! Step outputs and failure annotations for GitHub Actions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::api::{JobRecord, job_url};
use crate::error::OutputError;

pub const OUTPUT_ENV_VAR: &str = "GITHUB_OUTPUT";

/// Values exposed as step outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutputs {
    pub job_id: String,
    pub job_state: String,
    pub job_url: String,
}

impl ActionOutputs {
    pub fn from_record(record: &JobRecord) -> Self {
        Self {
            job_id: record.id.clone(),
            job_state: record.state.to_string(),
            job_url: job_url(&record.id),
        }
    }

    /// `(name, value)` pairs in output order.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("job-id", self.job_id.as_str()),
            ("job-state", self.job_state.as_str()),
            ("job-url", self.job_url.as_str()),
        ]
    }

    /// Append outputs as `name=value` lines to the file at `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), OutputError> {
        let write_failed = |source| OutputError::WriteFailed {
            path: path.display().to_string(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_failed)?;

        for (name, value) in self.pairs() {
            writeln!(file, "{}={}", name, value).map_err(write_failed)?;
        }

        Ok(())
    }
}

/// Format a `::error::` workflow command, escaped like `@actions/core`.
pub fn workflow_error(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{}", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::JobState;

    fn record() -> JobRecord {
        JobRecord {
            id: "job_42".into(),
            org_id: "org_1".into(),
            job_type: "docRequest".into(),
            state: JobState::Running,
        }
    }

    #[test]
    fn test_outputs_from_record() {
        let outputs = ActionOutputs::from_record(&record());
        assert_eq!(outputs.job_id, "job_42");
        assert_eq!(outputs.job_state, "running");
        assert_eq!(outputs.job_url, "https://app.doc.holiday/jobs/job_42");
    }

    #[test]
    fn test_workflow_error_escapes() {
        assert_eq!(
            workflow_error("100% failed\nretry later"),
            "::error::100%25 failed%0Aretry later"
        );
    }
}
