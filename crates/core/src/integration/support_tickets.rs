use async_trait::async_trait;
use tracing::info;

use super::IntegrationHooks;
use crate::config::SupportApiConfig;
use crate::submitter::{SubmitError, TicketSubmitter};
use crate::ticket::{CreatedTicket, TicketRequest};

/// Integration name reported to the host.
pub const INTEGRATION_NAME: &str = "support-tickets";

/// The support tickets integration: lifecycle hooks plus the
/// `createSupportTicket` action.
pub struct SupportTicketsIntegration {
    submitter: TicketSubmitter,
}

impl SupportTicketsIntegration {
    pub fn new(config: SupportApiConfig) -> Result<Self, SubmitError> {
        Ok(Self {
            submitter: TicketSubmitter::new(config)?,
        })
    }

    pub fn submitter(&self) -> &TicketSubmitter {
        &self.submitter
    }

    /// Action entry point. See [`TicketSubmitter::create_support_ticket`].
    pub async fn create_support_ticket(
        &self,
        request: &TicketRequest,
    ) -> Result<CreatedTicket, SubmitError> {
        self.submitter.create_support_ticket(request).await
    }
}

#[async_trait]
impl IntegrationHooks for SupportTicketsIntegration {
    async fn register(&self) {
        info!(integration = INTEGRATION_NAME, "register() called");
    }

    async fn unregister(&self) {
        info!(integration = INTEGRATION_NAME, "unregister() called");
    }

    fn name(&self) -> &'static str {
        INTEGRATION_NAME
    }
}
