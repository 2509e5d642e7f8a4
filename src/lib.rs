//! docjob - submit documentation-generation jobs to doc.holiday.
//!
//! # Overview
//!
//! docjob turns a changeset description ("the last 3 releases", "commits
//! abc123..def456", "tags v1.0.0 to v1.1.0", ...) into the single change
//! specification the doc.holiday API accepts, composes the job request from
//! action inputs and the GitHub event payload, and creates the job with
//! bounded retries and exponential backoff.

pub mod api;
pub mod changeset;
pub mod context;
pub mod error;
pub mod inputs;
pub mod outputs;
pub mod request;

// Re-export commonly used types
pub use api::{JobClient, JobRecord, JobRequest, JobState, job_url};
pub use changeset::{ChangeSpecification, ChangesetDescriptor, resolve, resolve_changes};
pub use error::{ContextError, InputError, OutputError, RequestError, SubmitError, TransportError};
pub use request::build_request;
