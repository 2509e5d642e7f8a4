//! Priority-ordered resolution of a changeset descriptor.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::descriptor::ChangesetDescriptor;

/// The single canonical change specification sent to doc.holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSpecification {
    ReleasesCount {
        count: i64,
    },
    TimeRange {
        start: String,
        end: String,
    },
    CommitsCount {
        count: i64,
    },
    CommitsSince {
        start_sha: String,
    },
    CommitsList {
        shas: Vec<String>,
    },
    CommitsRange {
        start_sha: String,
        end_sha: String,
        include_start: bool,
    },
    TagsRange {
        start: String,
        end: Option<String>,
    },
}

/// Resolve a descriptor into at most one change specification.
///
/// Rules are checked in fixed priority order and the first match wins:
/// releases count, time range (both bounds), commits count, commits since,
/// commit list (non-empty), commit range (both SHAs), tags. Counts are gated
/// on presence, so `0` and negative values still match; strings are gated on
/// being non-empty.
pub fn resolve(descriptor: &ChangesetDescriptor) -> Option<ChangeSpecification> {
    if let Some(count) = descriptor.releases_count {
        return Some(ChangeSpecification::ReleasesCount { count });
    }

    if let (Some(start), Some(end)) = (
        non_empty(&descriptor.time_range_start),
        non_empty(&descriptor.time_range_end),
    ) {
        return Some(ChangeSpecification::TimeRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    if let Some(count) = descriptor.commits_count {
        return Some(ChangeSpecification::CommitsCount { count });
    }

    if let Some(start_sha) = non_empty(&descriptor.commits_since_sha) {
        return Some(ChangeSpecification::CommitsSince {
            start_sha: start_sha.to_string(),
        });
    }

    if let Some(shas) = descriptor.commits_shas.as_ref().filter(|s| !s.is_empty()) {
        return Some(ChangeSpecification::CommitsList { shas: shas.clone() });
    }

    if let (Some(start_sha), Some(end_sha)) = (
        non_empty(&descriptor.commits_start_sha),
        non_empty(&descriptor.commits_end_sha),
    ) {
        return Some(ChangeSpecification::CommitsRange {
            start_sha: start_sha.to_string(),
            end_sha: end_sha.to_string(),
            include_start: descriptor.commits_include_start.unwrap_or(true),
        });
    }

    if let Some(start) = non_empty(&descriptor.tags_start) {
        return Some(ChangeSpecification::TagsRange {
            start: start.to_string(),
            end: non_empty(&descriptor.tags_end).map(str::to_string),
        });
    }

    None
}

/// Resolve a descriptor into the `changes` list the API expects.
///
/// The list holds zero or one element; it is a wire convention only.
pub fn resolve_changes(descriptor: &ChangesetDescriptor) -> Vec<ChangeSpecification> {
    resolve(descriptor).into_iter().collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommitsBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_sha: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_sha: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shas: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_start_commit: Option<bool>,
}

impl<'a> CommitsBody<'a> {
    fn empty() -> Self {
        Self {
            count: None,
            start_sha: None,
            end_sha: None,
            shas: None,
            include_start_commit: None,
        }
    }
}

#[derive(Serialize)]
struct CountBody {
    count: i64,
}

#[derive(Serialize)]
struct RangeBody<'a> {
    start: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<&'a str>,
}

// Wire form is a single-key object; four variants share the `commits` key.
impl Serialize for ChangeSpecification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            ChangeSpecification::ReleasesCount { count } => {
                map.serialize_entry("releases", &CountBody { count: *count })?;
            }
            ChangeSpecification::TimeRange { start, end } => {
                map.serialize_entry(
                    "timeRange",
                    &RangeBody {
                        start: start.as_str(),
                        end: Some(end.as_str()),
                    },
                )?;
            }
            ChangeSpecification::CommitsCount { count } => {
                map.serialize_entry(
                    "commits",
                    &CommitsBody {
                        count: Some(*count),
                        ..CommitsBody::empty()
                    },
                )?;
            }
            ChangeSpecification::CommitsSince { start_sha } => {
                map.serialize_entry(
                    "commits",
                    &CommitsBody {
                        start_sha: Some(start_sha.as_str()),
                        ..CommitsBody::empty()
                    },
                )?;
            }
            ChangeSpecification::CommitsList { shas } => {
                map.serialize_entry(
                    "commits",
                    &CommitsBody {
                        shas: Some(shas.as_slice()),
                        ..CommitsBody::empty()
                    },
                )?;
            }
            ChangeSpecification::CommitsRange {
                start_sha,
                end_sha,
                include_start,
            } => {
                map.serialize_entry(
                    "commits",
                    &CommitsBody {
                        start_sha: Some(start_sha.as_str()),
                        end_sha: Some(end_sha.as_str()),
                        include_start_commit: Some(*include_start),
                        ..CommitsBody::empty()
                    },
                )?;
            }
            ChangeSpecification::TagsRange { start, end } => {
                map.serialize_entry(
                    "tags",
                    &RangeBody {
                        start: start.as_str(),
                        end: end.as_deref(),
                    },
                )?;
            }
        }
        map.end()
    }
}
