use thiserror::Error;

use crate::i18n::Messages;

/// Why a lookup produced no result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The endpoint answered with a non-2xx status
    #[error("lookup endpoint returned HTTP {status}")]
    Http { status: u16 },

    /// Network failure, malformed body, or anything else the transport raised.
    /// `detail` is `None` when the failure carried no usable message.
    #[error("lookup failed: {}", .detail.as_deref().unwrap_or("unknown error"))]
    Unexpected { detail: Option<String> },
}

impl LookupError {
    pub fn unexpected(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let detail = (!detail.trim().is_empty()).then_some(detail);
        LookupError::Unexpected { detail }
    }

    /// The string shown to the user for this failure
    pub fn user_message(&self, messages: &Messages) -> String {
        match self {
            LookupError::Http { .. } => messages.lookup_failed.to_string(),
            LookupError::Unexpected { detail: Some(detail) } => detail.clone(),
            LookupError::Unexpected { detail: None } => messages.unknown_error.to_string(),
        }
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for LookupError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => Self::unexpected(js.message),
            gloo_net::Error::SerdeError(e) => Self::unexpected(e.to_string()),
            gloo_net::Error::GlooError(msg) => Self::unexpected(msg),
        }
    }
}

#[cfg(feature = "server")]
impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::unexpected(err.to_string())
    }
}
