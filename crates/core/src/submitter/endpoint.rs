use url::Url;

/// Path segment of the ticket-creation endpoint.
pub const TICKETS_PATH: &str = "/tickets";

/// Rewrite a base URL so it targets the ticket-creation endpoint.
///
/// Query string and fragment survive the rewrite. Strings that do not parse
/// as absolute URLs are handled textually. Never fails.
pub fn normalize_tickets_url(base: &str) -> String {
    match Url::parse(base) {
        Ok(mut url) => {
            let path = url.path().to_string();
            if path.is_empty() || path == "/" {
                url.set_path(TICKETS_PATH);
            } else if !ends_with_tickets(&path) {
                url.set_path(&format!("{}{}", path.trim_end_matches('/'), TICKETS_PATH));
            }
            url.to_string()
        }
        Err(_) => {
            let trimmed = base.trim_end_matches('/');
            if trimmed.ends_with(TICKETS_PATH) {
                trimmed.to_string()
            } else {
                format!("{trimmed}{TICKETS_PATH}")
            }
        }
    }
}

/// `/tickets` or `/tickets/` at the end of the path.
fn ends_with_tickets(path: &str) -> bool {
    path.strip_suffix('/')
        .unwrap_or(path)
        .ends_with(TICKETS_PATH)
}
