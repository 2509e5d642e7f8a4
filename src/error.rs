//! Error types for docjob modules using thiserror.

use thiserror::Error;

/// Errors from a single HTTP exchange, before classification.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    ReadBody(String),
}

/// Errors from job submission against the doc.holiday API.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(
        "Authentication failed. Please check your api-token. Ensure it is stored in GitHub secrets and passed correctly."
    )]
    Unauthorized,

    #[error("Rate limited by doc.holiday API (429)")]
    RateLimited,

    #[error("Doc.holiday API error ({status}): {body}")]
    Service { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transient(String),

    #[error("Failed to create job after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<SubmitError>,
    },

    #[error("Doc.holiday API returned an unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Failed to serialize job request: {0}")]
    Serialization(String),
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        SubmitError::Transient(err.to_string())
    }
}

/// Errors from parsing and validating action inputs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("{0} is required when event-type is not set or is \"custom\"")]
    MissingManualInput(&'static str),

    #[error("Invalid event-type '{0}'. Expected one of: release, merge, custom")]
    InvalidEventType(String),

    #[error("Multiple changeset types specified: {}. Only one type is allowed.", .0.join(", "))]
    MultipleChangesetKinds(Vec<&'static str>),

    #[error("Invalid number for {input}: '{value}'")]
    InvalidNumber { input: &'static str, value: String },

    #[error("Invalid timestamp for {input}: '{value}'. Use RFC 3339 (2025-01-01T00:00:00Z) or YYYY-MM-DD")]
    InvalidTimestamp { input: &'static str, value: String },
}

/// Errors from reading the GitHub event context.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Failed to read event payload {path}: {source}")]
    ReadPayload {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse event payload: {0}")]
    ParsePayload(#[source] serde_json::Error),

    #[error("No release data found in event payload. Is this a release event?")]
    MissingRelease,

    #[error("No pull request data found in event payload. Is this a PR event?")]
    MissingPullRequest,

    #[error("Pull request is not merged. Use event-type: merge only for merged PRs.")]
    PullRequestNotMerged,

    #[error(
        "Could not infer source-connection: GITHUB_REPOSITORY is not set. Pass source-connection explicitly."
    )]
    MissingRepository,
}

/// Errors from composing the job request.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    Context(#[from] ContextError),

    #[error("Title and body are required (missing {0})")]
    MissingField(&'static str),
}

/// Errors from reporting action outputs.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write outputs to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
