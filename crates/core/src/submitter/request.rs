use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;

use super::endpoint::normalize_tickets_url;
use super::{SubmitError, TransportError};
use crate::config::{SupportApiConfig, DEFAULT_AUTH_HEADER_NAME};
use crate::ticket::TicketRequest;

/// JSON body sent to the support API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TicketPayload {
    pub name: String,
    pub email: String,
    pub problem: String,
}

impl From<&TicketRequest> for TicketPayload {
    fn from(request: &TicketRequest) -> Self {
        Self {
            name: request.user_name.clone(),
            email: request.user_email.clone(),
            problem: request.problem_description.clone(),
        }
    }
}

/// A fully assembled ticket-creation call. The method is always POST.
#[derive(Debug, Clone)]
pub struct TicketSubmission {
    pub url: String,
    pub headers: HeaderMap,
    pub payload: TicketPayload,
}

/// Fail fast when no base URL is configured. Nothing is built or sent.
pub fn ensure_base_url(config: &SupportApiConfig) -> Result<(), SubmitError> {
    if config.url.trim().is_empty() {
        return Err(SubmitError::MissingBaseUrl);
    }
    Ok(())
}

impl TicketSubmission {
    /// Assemble the call for `request`.
    ///
    /// An auth header that cannot be represented is reported as a
    /// [`TransportError`], so it ends in a fallback id like any other
    /// failed exchange.
    pub fn build(
        config: &SupportApiConfig,
        request: &TicketRequest,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some((name, value)) = auth_header(config)? {
            headers.insert(name, value);
        }

        Ok(Self {
            url: normalize_tickets_url(&config.url),
            headers,
            payload: TicketPayload::from(request),
        })
    }
}

/// The configured auth header, or `None` when no token is set.
pub fn auth_header(
    config: &SupportApiConfig,
) -> Result<Option<(HeaderName, HeaderValue)>, TransportError> {
    let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let name = match config.auth_header_name.trim() {
        "" => DEFAULT_AUTH_HEADER_NAME,
        trimmed => trimmed,
    };
    let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
        TransportError::InvalidHeader(format!("'{name}' is not a valid header name"))
    })?;

    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        TransportError::InvalidHeader("token contains invalid characters".to_string())
    })?;
    value.set_sensitive(true);

    Ok(Some((name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    fn request() -> TicketRequest {
        TicketRequest::new("Jo", "jo@x.com", "Cannot log in")
    }

    fn config_with_token(token: Option<&str>, header: &str) -> SupportApiConfig {
        SupportApiConfig {
            url: "https://support.example.com".to_string(),
            token: token.map(str::to_string),
            auth_header_name: header.to_string(),
            timeout_ms: 1000,
        }
    }

    #[test]
    fn test_build_without_token() {
        let submission =
            TicketSubmission::build(&config_with_token(None, "Authorization"), &request()).unwrap();

        assert_eq!(submission.url, "https://support.example.com/tickets");
        assert_eq!(submission.headers.len(), 1);
        assert_eq!(submission.headers[CONTENT_TYPE], "application/json");
        assert!(submission.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_build_with_default_auth_header() {
        let submission = TicketSubmission::build(
            &config_with_token(Some("abc"), "Authorization"),
            &request(),
        )
        .unwrap();
        assert_eq!(submission.headers[AUTHORIZATION], "Bearer abc");
    }

    #[test]
    fn test_build_with_custom_header_is_trimmed() {
        let submission = TicketSubmission::build(
            &config_with_token(Some("abc"), "  X-Support-Token "),
            &request(),
        )
        .unwrap();
        assert_eq!(submission.headers["x-support-token"], "Bearer abc");
        assert!(submission.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_blank_header_name_falls_back_to_authorization() {
        let submission =
            TicketSubmission::build(&config_with_token(Some("abc"), "   "), &request()).unwrap();
        assert_eq!(submission.headers[AUTHORIZATION], "Bearer abc");
    }

    #[test]
    fn test_empty_token_sends_no_auth() {
        let submission =
            TicketSubmission::build(&config_with_token(Some(""), "Authorization"), &request())
                .unwrap();
        assert!(submission.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_invalid_header_name_is_transport_error() {
        let result =
            TicketSubmission::build(&config_with_token(Some("abc"), "Bad Header"), &request());
        assert!(matches!(result, Err(TransportError::InvalidHeader(_))));
    }

    #[test]
    fn test_token_with_newline_is_transport_error() {
        let result = TicketSubmission::build(
            &config_with_token(Some("line\nbreak"), "Authorization"),
            &request(),
        );
        assert!(matches!(result, Err(TransportError::InvalidHeader(_))));
    }

    #[test]
    fn test_invalid_header_ignored_without_token() {
        assert!(
            TicketSubmission::build(&config_with_token(None, "Bad Header"), &request()).is_ok()
        );
    }

    #[test]
    fn test_empty_url_is_missing_base_url() {
        let config = SupportApiConfig {
            url: "   ".to_string(),
            ..config_with_token(None, "Authorization")
        };
        assert!(matches!(
            ensure_base_url(&config),
            Err(SubmitError::MissingBaseUrl)
        ));
        assert!(ensure_base_url(&config_with_token(None, "Authorization")).is_ok());
    }

    #[test]
    fn test_payload_maps_fields_verbatim() {
        let request = TicketRequest::new("  Jo ", "JO@X.COM", "Cannot log in\n");
        let payload = TicketPayload::from(&request);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "name": "  Jo ",
                "email": "JO@X.COM",
                "problem": "Cannot log in\n"
            })
        );
    }
}
