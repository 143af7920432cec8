use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};

use super::request::TicketSubmission;
use super::TransportError;

/// Effective request timeout: a configured 0 becomes 1 ms rather than "no limit".
pub fn effective_timeout(timeout_ms: u64) -> Duration {
    Duration::from_millis(timeout_ms.max(1))
}

/// Perform the single POST for `submission` and return the response body.
///
/// The timeout covers the whole exchange; when it fires the request is
/// dropped. Non-2xx statuses fail before the body is read.
pub async fn send_with_timeout(
    client: &Client,
    submission: &TicketSubmission,
    timeout: Duration,
) -> Result<String, TransportError> {
    let response = client
        .post(&submission.url)
        .headers(submission.headers.clone())
        .json(&submission.payload)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify(e, timeout))?;

    let status = response.status();
    if !status.is_success() {
        error!(status = status.as_u16(), "Support API returned HTTP error");
        return Err(TransportError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await.map_err(|e| classify(e, timeout))?;
    debug!(bytes = body.len(), "Support API response received");

    Ok(body)
}

fn classify(e: reqwest::Error, timeout: Duration) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(timeout.as_millis() as u64)
    } else {
        TransportError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SupportApiConfig;
    use crate::ticket::TicketRequest;
    use std::time::Instant;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn submission_for(uri: &str) -> TicketSubmission {
        let config = SupportApiConfig {
            url: uri.to_string(),
            token: Some("t0k3n".to_string()),
            ..Default::default()
        };
        TicketSubmission::build(&config, &TicketRequest::new("Jo", "jo@x.com", "Cannot log in"))
            .unwrap()
    }

    #[test]
    fn test_effective_timeout_clamps_zero() {
        assert_eq!(effective_timeout(0), Duration::from_millis(1));
        assert_eq!(effective_timeout(10_000), Duration::from_millis(10_000));
    }

    #[tokio::test]
    async fn test_sends_post_with_headers_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tickets"))
            .and(header("content-type", "application/json"))
            .and(header("authorization", "Bearer t0k3n"))
            .and(body_json(serde_json::json!({
                "name": "Jo",
                "email": "jo@x.com",
                "problem": "Cannot log in"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":"T-1"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = send_with_timeout(
            &Client::new(),
            &submission_for(&mock_server.uri()),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(body, r#"{"id":"T-1"}"#);
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string(r#"{"ticketId":"NOPE"}"#))
            .mount(&mock_server)
            .await;

        let result = send_with_timeout(
            &Client::new(),
            &submission_for(&mock_server.uri()),
            Duration::from_secs(5),
        )
        .await;

        assert!(matches!(result, Err(TransportError::HttpStatus(503))));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"ticketId":"LATE"}"#)
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let started = Instant::now();
        let result = send_with_timeout(
            &Client::new(),
            &submission_for(&mock_server.uri()),
            Duration::from_millis(100),
        )
        .await;

        assert!(matches!(result, Err(TransportError::Timeout(100))));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port with nothing listening.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let result = send_with_timeout(
            &Client::new(),
            &submission_for(&format!("http://127.0.0.1:{port}")),
            Duration::from_secs(5),
        )
        .await;

        assert!(matches!(result, Err(TransportError::Network(_))));
    }
}
