//! Loosely populated changeset input.

/// Caller-supplied description of "what changed".
///
/// Every field is optional. At most one kind (releases, time range, commit
/// count, commits since, commit list, commit range, tags) is expected to be
/// populated; exclusivity is checked by the inputs layer, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangesetDescriptor {
    pub releases_count: Option<i64>,
    pub time_range_start: Option<String>,
    pub time_range_end: Option<String>,
    pub commits_count: Option<i64>,
    pub commits_since_sha: Option<String>,
    pub commits_shas: Option<Vec<String>>,
    pub commits_start_sha: Option<String>,
    pub commits_end_sha: Option<String>,
    pub commits_include_start: Option<bool>,
    pub tags_start: Option<String>,
    pub tags_end: Option<String>,
}
