//! GitHub event context: smart defaults and source connection inference.
//!
//! Reads `GITHUB_REPOSITORY` and the webhook payload at `GITHUB_EVENT_PATH`,
//! the same variables the Actions runner sets for every step.

use std::env;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::api::EventType;
use crate::error::ContextError;

pub const REPOSITORY_ENV_VAR: &str = "GITHUB_REPOSITORY";
pub const EVENT_PATH_ENV_VAR: &str = "GITHUB_EVENT_PATH";

/// The parts of a webhook payload docjob reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    pub release: Option<ReleasePayload>,
    pub pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleasePayload {
    pub tag_name: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub merged: bool,
}

/// Repository and payload of the triggering event.
#[derive(Debug, Clone, Default)]
pub struct EventContext {
    /// `owner/repo`
    pub repository: Option<String>,
    pub payload: EventPayload,
}

/// Title, body and event type derived from the event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartDefaults {
    pub title: String,
    pub body: String,
    pub event_type: EventType,
}

impl EventContext {
    pub fn new(repository: Option<String>, payload: EventPayload) -> Self {
        Self {
            repository,
            payload,
        }
    }

    /// Load the context from the Actions runner environment.
    ///
    /// Without `GITHUB_EVENT_PATH` the payload is empty; smart mode will then
    /// fail with a descriptive error rather than here.
    pub fn from_env() -> Result<Self, ContextError> {
        let repository = env::var(REPOSITORY_ENV_VAR)
            .ok()
            .filter(|r| !r.trim().is_empty());

        let payload = match env::var(EVENT_PATH_ENV_VAR) {
            Ok(path) if !path.is_empty() => read_payload(Path::new(&path))?,
            _ => EventPayload::default(),
        };

        Ok(Self::new(repository, payload))
    }
}

/// Read and parse a webhook payload file.
pub fn read_payload(path: &Path) -> Result<EventPayload, ContextError> {
    debug!("Reading event payload from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| ContextError::ReadPayload {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(ContextError::ParsePayload)
}

/// Generate smart defaults based on the event payload.
pub fn smart_defaults(
    context: &EventContext,
    event_type: EventType,
) -> Result<SmartDefaults, ContextError> {
    match event_type {
        EventType::Release => release_defaults(context),
        EventType::Merge => merge_defaults(context),
    }
}

fn release_defaults(context: &EventContext) -> Result<SmartDefaults, ContextError> {
    let release = context
        .payload
        .release
        .as_ref()
        .ok_or(ContextError::MissingRelease)?;

    Ok(SmartDefaults {
        title: format!("Release notes for {}", release.tag_name),
        body: release.body.clone().unwrap_or_default(),
        event_type: EventType::Release,
    })
}

fn merge_defaults(context: &EventContext) -> Result<SmartDefaults, ContextError> {
    let pr = context
        .payload
        .pull_request
        .as_ref()
        .ok_or(ContextError::MissingPullRequest)?;

    if !pr.merged {
        return Err(ContextError::PullRequestNotMerged);
    }

    Ok(SmartDefaults {
        title: format!("Documentation for PR #{}: {}", pr.number, pr.title),
        body: pr.body.clone().unwrap_or_default(),
        event_type: EventType::Merge,
    })
}

/// Infer `owner/repo` from the current repository.
pub fn infer_source_connection(context: &EventContext) -> Result<String, ContextError> {
    context
        .repository
        .clone()
        .ok_or(ContextError::MissingRepository)
}
