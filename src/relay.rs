use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::contact::Submission;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone)]
pub enum RelayError {
    #[error("relay is not configured: {0} was not set at build time")]
    NotConfigured(&'static str),
    #[error("couldn't reach relay: {0}")]
    Network(String),
    #[error("relay rejected message ({status}): {reason}")]
    Rejected { status: StatusCode, reason: String },
}

/// Anything that can deliver a contact submission.
#[allow(async_fn_in_trait)]
pub trait Relay {
    async fn send(&self, submission: &Submission) -> Result<(), RelayError>;
}

/// Provider account details. These are deployment settings compiled into
/// the client bundle, so the key is the provider's public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Serialize, Debug)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Submission,
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    pub fn with_endpoint(self, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..self
        }
    }

    /// Reads the `PORTFOLIO_RELAY_*` variables captured at compile time.
    pub fn from_build_env() -> Result<Self, RelayError> {
        Self::from_values(
            option_env!("PORTFOLIO_RELAY_ENDPOINT"),
            option_env!("PORTFOLIO_RELAY_SERVICE_ID"),
            option_env!("PORTFOLIO_RELAY_TEMPLATE_ID"),
            option_env!("PORTFOLIO_RELAY_PUBLIC_KEY"),
        )
    }

    fn from_values(
        endpoint: Option<&str>,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, RelayError> {
        let config = Self::new(
            required(service_id, "PORTFOLIO_RELAY_SERVICE_ID")?,
            required(template_id, "PORTFOLIO_RELAY_TEMPLATE_ID")?,
            required(public_key, "PORTFOLIO_RELAY_PUBLIC_KEY")?,
        );
        Ok(match endpoint.filter(|e| !e.trim().is_empty()) {
            Some(endpoint) => config.with_endpoint(endpoint),
            None => config,
        })
    }

    fn request<'a>(&'a self, submission: &'a Submission) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: submission,
        }
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, RelayError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(RelayError::NotConfigured(name))
}

/// Relay backed by the provider's REST API.
#[derive(Debug, Clone)]
pub struct EmailRelay {
    config: RelayConfig,
    client: reqwest::Client,
}

impl EmailRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

impl Relay for EmailRelay {
    async fn send(&self, submission: &Submission) -> Result<(), RelayError> {
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&self.config.request(submission))
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let reason = res
            .text()
            .await
            .unwrap_or_else(|e| format!("unreadable response: {e}"));
        Err(RelayError::Rejected { status, reason })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn jane() -> Submission {
        Submission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_request_payload() {
        let config = RelayConfig::new("service_abc", "template_xyz", "pk_123");
        let submission = jane();
        let payload = serde_json::to_value(config.request(&submission)).unwrap();
        assert_eq!(
            payload,
            json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "message": "Hello",
                },
            })
        );
    }

    #[test]
    fn test_missing_values_are_not_configured() {
        let res = RelayConfig::from_values(None, Some("svc"), None, Some("key"));
        match res {
            Err(RelayError::NotConfigured(name)) => {
                assert_eq!(name, "PORTFOLIO_RELAY_TEMPLATE_ID")
            }
            other => panic!("expected NotConfigured, got {other:?}"),
        }

        let blank = RelayConfig::from_values(None, Some(" "), Some("tpl"), Some("key"));
        assert!(matches!(
            blank,
            Err(RelayError::NotConfigured("PORTFOLIO_RELAY_SERVICE_ID"))
        ));
    }

    #[test]
    fn test_endpoint_override() {
        let default =
            RelayConfig::from_values(None, Some("svc"), Some("tpl"), Some("key")).unwrap();
        assert_eq!(default.endpoint, DEFAULT_ENDPOINT);

        let custom = RelayConfig::from_values(
            Some("http://localhost:8080/send"),
            Some("svc"),
            Some("tpl"),
            Some("key"),
        )
        .unwrap();
        assert_eq!(custom.endpoint, "http://localhost:8080/send");
        assert_eq!(custom.public_key, "key");
    }

    #[test]
    fn test_rejection_message() {
        let err = RelayError::Rejected {
            status: StatusCode::BAD_REQUEST,
            reason: "The Public Key is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "relay rejected message (400 Bad Request): The Public Key is invalid"
        );
    }
}
