use std::{error, fmt};

use serde_json::Value;

/// Defines the errors you might encounter talking to Freshdesk.
#[derive(Debug)]
pub enum FreshdeskError {
    /// The client could not be configured.
    Config(String),
    /// The request never produced a response.
    Http(reqwest::Error),
    /// Freshdesk answered with a non-success status.
    Api {
        status: u16,
        message: String,
        errors: Option<Value>,
    },
    /// The response body was not valid JSON.
    Decode(String),
    /// Input was rejected before any request was made.
    Validation(String),
}

impl FreshdeskError {
    /// HTTP status of an API error, if there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FreshdeskError::Api { status, .. } => Some(*status),
            FreshdeskError::Http(error) => error.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The `errors` array Freshdesk attaches to validation failures.
    pub fn field_errors(&self) -> Option<&Value> {
        match self {
            FreshdeskError::Api { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Display for FreshdeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreshdeskError::Config(message) => {
                write!(f, "Invalid Freshdesk configuration: {}", message)
            }
            FreshdeskError::Http(error) => write!(f, "Request to Freshdesk failed: {}", error),
            FreshdeskError::Api {
                status,
                message,
                errors,
            } => match errors {
                Some(errors) => write!(f, "Freshdesk returned {}: {} {}", status, message, errors),
                None => write!(f, "Freshdesk returned {}: {}", status, message),
            },
            FreshdeskError::Decode(message) => {
                write!(f, "Could not decode Freshdesk response: {}", message)
            }
            FreshdeskError::Validation(message) => write!(f, "{}", message),
        }
    }
}

impl error::Error for FreshdeskError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            FreshdeskError::Http(error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FreshdeskError {
    fn from(error: reqwest::Error) -> Self {
        FreshdeskError::Http(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_display_includes_field_errors() {
        let error = FreshdeskError::Api {
            status: 400,
            message: "Validation failed".to_string(),
            errors: Some(json!([{"field": "email", "code": "missing_field"}])),
        };

        let text = error.to_string();
        assert!(text.starts_with("Freshdesk returned 400: Validation failed"));
        assert!(text.contains("missing_field"));
        assert_eq!(error.status(), Some(400));
        assert!(error.field_errors().is_some());
    }

    #[test]
    fn test_validation_error_displays_bare_message() {
        let error = FreshdeskError::Validation("Name is required".to_string());
        assert_eq!(error.to_string(), "Name is required");
        assert_eq!(error.status(), None);
    }
}
