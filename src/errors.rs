use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::models::component::ComponentType;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("WhatsApp Business Account ID is required")]
    MissingAccountId,

    #[error("invalid template name: {0}")]
    InvalidName(String),

    #[error("The template must include a BODY component.")]
    MissingBody,

    #[error("The template contains repeated components: {0}")]
    DuplicateComponent(ComponentType),

    #[error(
        "Named parameters must not contain numbers as variables, e.g., {{{{1}}}}. Use named parameters like {{{{name}}}}."
    )]
    NamedParameterFormat,

    #[error("Positional parameters must contain variables like {{{{1}}}}, {{{{2}}}}, etc.")]
    PositionalParameterFormat,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl TemplateError {
    /// True for every variant raised locally, before the network is touched.
    pub fn is_validation(&self) -> bool {
        !matches!(self, TemplateError::Transport(_))
    }
}

/// Failure reported by the transport layer.
///
/// `status` is `None` when no HTTP response was received at all (connect
/// error, timeout). `payload` holds the remote error body, parsed as JSON when
/// possible and as a JSON string otherwise.
#[derive(Error, Debug)]
#[error("transport error{}: {message}", http_status_label(.status))]
pub struct TransportError {
    pub status: Option<u16>,
    pub payload: Option<JsonValue>,
    pub message: String,
}

impl TransportError {
    pub fn from_response(status: u16, body: &str) -> Self {
        let payload = if body.is_empty() {
            None
        } else {
            Some(
                serde_json::from_str::<JsonValue>(body)
                    .unwrap_or_else(|_| JsonValue::String(body.to_string())),
            )
        };

        let message = payload
            .as_ref()
            .and_then(|p| p.pointer("/error/message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("remote service returned status {status}"));

        Self {
            status: Some(status),
            payload,
            message,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            payload: None,
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self {
            status: None,
            payload: None,
            message: message.into(),
        }
    }

    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            payload: None,
            message: message.into(),
        }
    }
}

fn http_status_label(status: &Option<u16>) -> String {
    status
        .map(|status| format!(" (HTTP {status})"))
        .unwrap_or_default()
}
