//! Job creation against the doc.holiday API with bounded retries.

use tracing::{debug, info, warn};

use crate::error::{SubmitError, TransportError};

use super::retry::{MAX_ATTEMPTS, Sleeper, TokioSleeper, backoff_delay, classify_response, is_retryable};
use super::transport::{ReqwestTransport, Transport};
use super::types::{JobRecord, JobRequest};

/// Default API host.
pub const API_BASE_URL: &str = "https://api.doc.holiday";

/// Web app host used for job links.
pub const APP_BASE_URL: &str = "https://app.doc.holiday";

const JOBS_PATH: &str = "/api/v1/jobs";

/// Build the viewer URL for a job.
pub fn job_url(job_id: &str) -> String {
    format!("{}/jobs/{}", APP_BASE_URL, job_id)
}

/// Client for `POST /api/v1/jobs`.
///
/// Generic over the transport and sleeper so tests can script responses and
/// observe backoff without real network or timers.
pub struct JobClient<T = ReqwestTransport, S = TokioSleeper> {
    base_url: String,
    transport: T,
    sleeper: S,
}

impl JobClient {
    /// Client against `base_url` using reqwest and the tokio timer.
    pub fn with_base_url(base_url: &str) -> Result<Self, TransportError> {
        Ok(JobClient::with_parts(
            base_url,
            ReqwestTransport::new()?,
            TokioSleeper,
        ))
    }
}

impl<T: Transport, S: Sleeper> JobClient<T, S> {
    pub fn with_parts(base_url: &str, transport: T, sleeper: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            sleeper,
        }
    }

    pub fn jobs_url(&self) -> String {
        format!("{}{}", self.base_url, JOBS_PATH)
    }

    /// Create a job, retrying rate limits and network failures.
    ///
    /// Makes up to 3 attempts. A 401 fails at once; any other non-2xx
    /// status other than 429 fails at once with the status and body. When
    /// every attempt is used up the last error is wrapped in
    /// [`SubmitError::RetriesExhausted`].
    pub async fn create_job(
        &self,
        api_token: &str,
        request: &JobRequest,
    ) -> Result<JobRecord, SubmitError> {
        let url = self.jobs_url();
        let payload = serde_json::to_string(request)
            .map_err(|e| SubmitError::Serialization(e.to_string()))?;
        debug!(%url, %payload, "Prepared job request");

        let mut attempt = 0;
        loop {
            attempt += 1;
            info!(
                "Attempting to create job (attempt {}/{})...",
                attempt, MAX_ATTEMPTS
            );

            let error = match self.try_create(&url, api_token, &payload).await {
                Ok(record) => {
                    info!("Job created successfully: {}", record.id);
                    return Ok(record);
                }
                Err(e) => e,
            };

            if !is_retryable(&error) {
                return Err(error);
            }

            if attempt >= MAX_ATTEMPTS {
                warn!("All {} attempts failed. Last error: {}", MAX_ATTEMPTS, error);
                return Err(SubmitError::RetriesExhausted {
                    attempts: attempt,
                    last: Box::new(error),
                });
            }

            let delay = backoff_delay(attempt);
            warn!("{}. Retrying in {}ms...", error, delay.as_millis());
            self.sleeper.sleep(delay).await;
        }
    }

    /// Single attempt: one POST, classified.
    async fn try_create(
        &self,
        url: &str,
        api_token: &str,
        payload: &str,
    ) -> Result<JobRecord, SubmitError> {
        let response = self.transport.post_json(url, api_token, payload).await?;

        if let Some(error) = classify_response(&response) {
            return Err(error);
        }

        serde_json::from_str(&response.body).map_err(|e| {
            SubmitError::InvalidResponse(format!("{}. Body: {}", e, response.body))
        })
    }
}
