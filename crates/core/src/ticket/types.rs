use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum length of a problem description, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 5;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Errors for inbound ticket requests that fail field validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("userName must not be empty")]
    EmptyName,

    #[error("userEmail '{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("problemDescription must be at least {} characters", MIN_DESCRIPTION_CHARS)]
    DescriptionTooShort,
}

/// Input of the `createSupportTicket` action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    /// End user name
    pub user_name: String,
    /// End user email
    pub user_email: String,
    /// Brief description (1-3 sentences)
    pub problem_description: String,
}

impl TicketRequest {
    pub fn new(
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        problem_description: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            user_email: user_email.into(),
            problem_description: problem_description.into(),
        }
    }

    /// Check the field constraints the hosting runtime enforces before the action runs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_valid_email(&self.user_email) {
            return Err(ValidationError::InvalidEmail(self.user_email.clone()));
        }
        if self.problem_description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(ValidationError::DescriptionTooShort);
        }
        Ok(())
    }
}

/// Syntactic email check: one `@`, no whitespace, a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Where a ticket identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketSource {
    /// Extracted from the support API response.
    Remote,
    /// Generated locally because the API call failed or carried no identifier.
    Fallback,
}

impl TicketSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketSource::Remote => "remote",
            TicketSource::Fallback => "fallback",
        }
    }
}

/// Output of the `createSupportTicket` action.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTicket {
    /// Ticket identifier (from API or generated fallback)
    pub ticket_id: String,
    #[serde(skip)]
    pub source: TicketSource,
}

impl CreatedTicket {
    pub fn remote(ticket_id: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            source: TicketSource::Remote,
        }
    }

    pub fn fallback(ticket_id: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            source: TicketSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == TicketSource::Fallback
    }
}
