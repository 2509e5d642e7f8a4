//! Action inputs: raw strings from the CLI or `INPUT_*` environment, parsed
//! and validated into typed values.
//!
//! GitHub passes every declared input as a string, so empty strings are
//! treated the same as a missing input.

use chrono::{DateTime, NaiveDate};
use clap::Args;

use crate::api::EventType;
use crate::changeset::ChangesetDescriptor;
use crate::error::InputError;

/// Raw inputs as provided by the workflow or the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct RawInputs {
    /// doc.holiday API token
    #[arg(long, env = "INPUT_API-TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Smart mode: release, merge, or custom
    #[arg(long, env = "INPUT_EVENT-TYPE")]
    pub event_type: Option<String>,

    /// Job title (required in custom mode)
    #[arg(long, env = "INPUT_TITLE")]
    pub title: Option<String>,

    /// Job body (required in custom mode)
    #[arg(long, env = "INPUT_BODY")]
    pub body: Option<String>,

    /// Comma-separated publication names
    #[arg(long, env = "INPUT_PUBLICATIONS")]
    pub publications: Option<String>,

    /// Source connection as owner/repo (defaults to GITHUB_REPOSITORY)
    #[arg(long, env = "INPUT_SOURCE-CONNECTION")]
    pub source_connection: Option<String>,

    /// Comma-separated labels
    #[arg(long, env = "INPUT_LABELS")]
    pub labels: Option<String>,

    /// Newline-separated comments
    #[arg(long, env = "INPUT_COMMENTS")]
    pub comments: Option<String>,

    /// Comma-separated relevant links
    #[arg(long, env = "INPUT_RELEVANT-LINKS")]
    pub relevant_links: Option<String>,

    /// Number of most recent releases to document
    #[arg(long, env = "INPUT_RELEASES-COUNT", allow_hyphen_values = true)]
    pub releases_count: Option<String>,

    /// Start of the time range (RFC 3339 or YYYY-MM-DD)
    #[arg(long, env = "INPUT_TIME-RANGE-START")]
    pub time_range_start: Option<String>,

    /// End of the time range (RFC 3339 or YYYY-MM-DD)
    #[arg(long, env = "INPUT_TIME-RANGE-END")]
    pub time_range_end: Option<String>,

    /// Number of most recent commits to document
    #[arg(long, env = "INPUT_COMMITS-COUNT", allow_hyphen_values = true)]
    pub commits_count: Option<String>,

    /// Document every commit since this SHA
    #[arg(long, env = "INPUT_COMMITS-SINCE-SHA")]
    pub commits_since_sha: Option<String>,

    /// Comma-separated list of commit SHAs
    #[arg(long, env = "INPUT_COMMITS-SHAS")]
    pub commits_shas: Option<String>,

    /// First commit of a range
    #[arg(long, env = "INPUT_COMMITS-START-SHA")]
    pub commits_start_sha: Option<String>,

    /// Last commit of a range
    #[arg(long, env = "INPUT_COMMITS-END-SHA")]
    pub commits_end_sha: Option<String>,

    /// Whether the range includes its start commit ("true" or "false")
    #[arg(long, env = "INPUT_COMMITS-INCLUDE-START")]
    pub commits_include_start: Option<String>,

    /// Starting tag
    #[arg(long, env = "INPUT_TAGS-START")]
    pub tags_start: Option<String>,

    /// Ending tag (open-ended when omitted)
    #[arg(long, env = "INPUT_TAGS-END")]
    pub tags_end: Option<String>,
}

/// How title and body are determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMode {
    /// Defaults come from the release event payload.
    Release,
    /// Defaults come from the merged pull request payload.
    Merge,
    /// Title and body are supplied by the caller.
    Custom,
}

impl EventMode {
    /// The event type sent to the API, if any.
    pub fn event_type(&self) -> Option<EventType> {
        match self {
            EventMode::Release => Some(EventType::Release),
            EventMode::Merge => Some(EventType::Merge),
            EventMode::Custom => None,
        }
    }
}

/// Parsed and validated inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionInputs {
    pub api_token: String,
    pub event_mode: EventMode,
    pub title: Option<String>,
    pub body: Option<String>,
    pub publications: Option<Vec<String>>,
    pub source_connection: Option<String>,
    pub labels: Option<Vec<String>>,
    pub comments: Option<Vec<String>>,
    pub relevant_links: Option<Vec<String>>,
    pub changeset: Option<ChangesetDescriptor>,
}

/// Parse and validate all action inputs.
pub fn parse_inputs(raw: &RawInputs) -> Result<ActionInputs, InputError> {
    let api_token = value(&raw.api_token).ok_or(InputError::MissingInput("api-token"))?;
    let event_mode = parse_event_mode(value(&raw.event_type))?;

    let title = value(&raw.title);
    let body = value(&raw.body);

    let changeset = parse_changeset(raw)?;

    if event_mode == EventMode::Custom {
        if title.is_none() {
            return Err(InputError::MissingManualInput("title"));
        }
        if body.is_none() {
            return Err(InputError::MissingManualInput("body"));
        }
    }

    Ok(ActionInputs {
        api_token: api_token.to_string(),
        event_mode,
        title: title.map(str::to_string),
        body: body.map(str::to_string),
        publications: split_list(&raw.publications, ','),
        source_connection: value(&raw.source_connection).map(str::to_string),
        labels: split_list(&raw.labels, ','),
        comments: split_list(&raw.comments, '\n'),
        relevant_links: split_list(&raw.relevant_links, ','),
        changeset,
    })
}

fn parse_event_mode(event_type: Option<&str>) -> Result<EventMode, InputError> {
    match event_type {
        None | Some("custom") => Ok(EventMode::Custom),
        Some("release") => Ok(EventMode::Release),
        Some("merge") => Ok(EventMode::Merge),
        Some(other) => Err(InputError::InvalidEventType(other.to_string())),
    }
}

/// Parse the changeset inputs into a descriptor.
///
/// Returns `None` when no changeset kind is given at all. The closing
/// bounds (`time-range-end`, `commits-end-sha`, `tags-end`) do not count as
/// a kind on their own.
pub fn parse_changeset(raw: &RawInputs) -> Result<Option<ChangesetDescriptor>, InputError> {
    let kinds: Vec<&'static str> = [
        (&raw.releases_count, "releases-count"),
        (&raw.time_range_start, "time-range"),
        (&raw.commits_count, "commits-count"),
        (&raw.commits_since_sha, "commits-since-sha"),
        (&raw.commits_shas, "commits-shas"),
        (&raw.commits_start_sha, "commits-range"),
        (&raw.tags_start, "tags"),
    ]
    .into_iter()
    .filter(|(input, _)| value(input).is_some())
    .map(|(_, kind)| kind)
    .collect();

    if kinds.is_empty() {
        return Ok(None);
    }

    if kinds.len() > 1 {
        return Err(InputError::MultipleChangesetKinds(kinds));
    }

    Ok(Some(ChangesetDescriptor {
        releases_count: parse_count(&raw.releases_count, "releases-count")?,
        time_range_start: parse_timestamp(&raw.time_range_start, "time-range-start")?,
        time_range_end: parse_timestamp(&raw.time_range_end, "time-range-end")?,
        commits_count: parse_count(&raw.commits_count, "commits-count")?,
        commits_since_sha: value(&raw.commits_since_sha).map(str::to_string),
        commits_shas: split_list(&raw.commits_shas, ','),
        commits_start_sha: value(&raw.commits_start_sha).map(str::to_string),
        commits_end_sha: value(&raw.commits_end_sha).map(str::to_string),
        commits_include_start: value(&raw.commits_include_start).map(|v| v == "true"),
        tags_start: value(&raw.tags_start).map(str::to_string),
        tags_end: value(&raw.tags_end).map(str::to_string),
    }))
}

/// Trimmed, non-empty input value.
fn value(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Split a delimited input, dropping blank items. An empty result is `None`.
fn split_list(raw: &Option<String>, delimiter: char) -> Option<Vec<String>> {
    let items: Vec<String> = value(raw)?
        .split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() { None } else { Some(items) }
}

fn parse_count(raw: &Option<String>, input: &'static str) -> Result<Option<i64>, InputError> {
    value(raw)
        .map(|v| {
            v.parse::<i64>().map_err(|_| InputError::InvalidNumber {
                input,
                value: v.to_string(),
            })
        })
        .transpose()
}

/// Validate a timestamp but pass the original text through unchanged.
fn parse_timestamp(
    raw: &Option<String>,
    input: &'static str,
) -> Result<Option<String>, InputError> {
    let Some(v) = value(raw) else {
        return Ok(None);
    };

    let valid = DateTime::parse_from_rfc3339(v).is_ok()
        || NaiveDate::parse_from_str(v, "%Y-%m-%d").is_ok();

    if valid {
        Ok(Some(v.to_string()))
    } else {
        Err(InputError::InvalidTimestamp {
            input,
            value: v.to_string(),
        })
    }
}
