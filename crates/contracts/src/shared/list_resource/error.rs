use thiserror::Error;

/// Failure of a single REST call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status. `message` is the response body
    /// verbatim, or `HTTP <status>` when the body is empty.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// Response arrived but could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// Request could not be built (serialization, invalid header, ...)
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn http(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            body.trim().to_string()
        };
        ApiError::Http { status, message }
    }
}

/// Errors surfaced by the list controller to the view
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    /// List retrieval failed; shown as a banner above the table
    #[error("{0}")]
    Fetch(String),
    /// Required field missing; the mutation is never dispatched
    #[error("{0}")]
    Validation(String),
    /// Create/update rejected or failed in transit; shown inside the dialog
    #[error("{0}")]
    Mutation(String),
    /// No dialog is open, or a save is already in flight
    #[error("No open form to submit")]
    NotEditing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_uses_body_verbatim() {
        let err = ApiError::http(400, "Meal code already exists\n");
        assert_eq!(err.to_string(), "Meal code already exists");
    }

    #[test]
    fn http_error_falls_back_to_status() {
        let err = ApiError::http(502, "  ");
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
