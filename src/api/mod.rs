//! doc.holiday jobs API client.

pub mod client;
pub mod retry;
pub mod transport;
pub mod types;

pub use client::{API_BASE_URL, APP_BASE_URL, JobClient, job_url};
pub use retry::{MAX_ATTEMPTS, Sleeper, TokioSleeper, backoff_delay, classify_response, is_retryable};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use types::{DocRequest, EventType, JobRecord, JobRequest, JobState};
