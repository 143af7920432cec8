//! The `createSupportTicket` action.
//!
//! A submission runs four steps in order: URL normalization, request
//! building, one timed HTTP exchange, and response resolution. Only
//! misconfiguration reaches the caller; every upstream failure is logged and
//! answered with a locally generated ticket id.

mod endpoint;
mod error;
mod request;
mod transport;

pub use endpoint::{normalize_tickets_url, TICKETS_PATH};
pub use error::*;
pub use request::{auth_header, ensure_base_url, TicketPayload, TicketSubmission};
pub use transport::{effective_timeout, send_with_timeout};

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{error, info, warn};

use crate::config::SupportApiConfig;
use crate::metrics::{SUBMISSIONS_TOTAL, UPSTREAM_DURATION, UPSTREAM_FAILURES};
use crate::ticket::{generate_fallback_ticket_id, resolve_ticket_id, CreatedTicket, TicketRequest};

/// Submits support tickets to the configured API.
///
/// Holds only immutable configuration and a pooled HTTP client, so one
/// instance can serve concurrent invocations.
pub struct TicketSubmitter {
    client: Client,
    config: SupportApiConfig,
    timeout: Duration,
}

impl TicketSubmitter {
    /// Create a new submitter.
    pub fn new(config: SupportApiConfig) -> Result<Self, SubmitError> {
        let timeout = effective_timeout(config.timeout_ms);
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            config,
            timeout,
        })
    }

    pub fn config(&self) -> &SupportApiConfig {
        &self.config
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Create a ticket for `request`.
    ///
    /// Returns `Err` only when the base URL is empty, before any network
    /// attempt. Unusable auth headers, HTTP errors, timeouts, network
    /// failures, unparsable bodies and bodies without an identifier all
    /// yield a fallback id.
    pub async fn create_support_ticket(
        &self,
        request: &TicketRequest,
    ) -> Result<CreatedTicket, SubmitError> {
        ensure_base_url(&self.config)?;

        let started = Instant::now();
        let outcome = match TicketSubmission::build(&self.config, request) {
            Ok(submission) => {
                info!(url = %submission.url, "POST support ticket");
                self.exchange(&submission).await
            }
            Err(e) => Err(e),
        };
        let elapsed = started.elapsed().as_secs_f64();

        let ticket = match outcome {
            Ok(Some(ticket_id)) => {
                UPSTREAM_DURATION
                    .with_label_values(&["success"])
                    .observe(elapsed);
                CreatedTicket::remote(ticket_id)
            }
            Ok(None) => {
                UPSTREAM_DURATION
                    .with_label_values(&["success"])
                    .observe(elapsed);
                warn!("No ticketId in response; generating fallback");
                CreatedTicket::fallback(generate_fallback_ticket_id())
            }
            Err(e) => {
                UPSTREAM_DURATION
                    .with_label_values(&["error"])
                    .observe(elapsed);
                UPSTREAM_FAILURES.with_label_values(&[e.kind()]).inc();
                error!(error = %e, "Network/parse error; generating fallback");
                CreatedTicket::fallback(generate_fallback_ticket_id())
            }
        };

        SUBMISSIONS_TOTAL
            .with_label_values(&[ticket.source.as_str()])
            .inc();
        info!(
            ticket_id = %ticket.ticket_id,
            source = ticket.source.as_str(),
            "Created ticket"
        );

        Ok(ticket)
    }

    async fn exchange(
        &self,
        submission: &TicketSubmission,
    ) -> Result<Option<String>, TransportError> {
        let body = send_with_timeout(&self.client, submission, self.timeout).await?;
        resolve_ticket_id(&body).map_err(|e| TransportError::InvalidBody(e.to_string()))
    }
}
