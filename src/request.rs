//! Composition of the job request from inputs and event context.

use tracing::{info, warn};

use crate::api::{DocRequest, JobRequest};
use crate::changeset::resolve_changes;
use crate::context::{EventContext, infer_source_connection, smart_defaults};
use crate::error::RequestError;
use crate::inputs::ActionInputs;

/// Build the API request.
///
/// In release or merge mode the title and body come from the event payload
/// and replace any supplied values. The source connection falls back to the
/// current repository. The changeset, when it resolves, becomes the single
/// entry of `changes`.
pub fn build_request(
    inputs: &ActionInputs,
    context: &EventContext,
) -> Result<JobRequest, RequestError> {
    let (title, body, event_type) = match inputs.event_mode.event_type() {
        Some(event_type) => {
            info!("Smart mode: {}", event_type);
            let defaults = smart_defaults(context, event_type)?;
            (defaults.title, defaults.body, Some(defaults.event_type))
        }
        None => (
            inputs.title.clone().unwrap_or_default(),
            inputs.body.clone().unwrap_or_default(),
            None,
        ),
    };

    if title.is_empty() {
        return Err(RequestError::MissingField("title"));
    }
    if body.is_empty() {
        return Err(RequestError::MissingField("body"));
    }

    let source_connection = match &inputs.source_connection {
        Some(connection) => connection.clone(),
        None => infer_source_connection(context)?,
    };
    info!("Source connection: {}", source_connection);

    let changes = match &inputs.changeset {
        Some(descriptor) => {
            let changes = resolve_changes(descriptor);
            if changes.is_empty() {
                warn!("Changeset inputs are incomplete; no change specification was sent");
            } else {
                info!("Changeset specification added to request");
                warn!("Changeset inputs override any commits specified in body");
            }
            changes
        }
        None => Vec::new(),
    };

    Ok(JobRequest {
        doc_request: DocRequest {
            title,
            body,
            source_connection,
            publications: inputs.publications.clone(),
            labels: inputs.labels.clone(),
            comments: inputs.comments.clone(),
            relevant_links: inputs.relevant_links.clone(),
            event_type,
            changes,
        },
    })
}
