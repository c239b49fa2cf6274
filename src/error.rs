//! Error taxonomy for the auth forms and the profile refresh.
//!
//! ERROR HANDLING
//! ==============
//! Forms turn an `AuthError` into a one-line user message; the profile
//! refresh logs and swallows it. Nothing here is fatal to the page and
//! nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures from validating, sending, or interpreting an auth request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A form field failed client-side validation. No request was sent.
    #[error("{0}")]
    Validation(String),

    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The bearer token was refused by the profile endpoint.
    #[error("access token rejected")]
    Unauthorized,

    /// A success response carried no `access_token`.
    #[error("response did not include an access token")]
    MissingToken { message: Option<String> },

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Decode(String),
}

/// Which form a failure is reported on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Register,
}

impl AuthFlow {
    fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Registration",
        }
    }

    fn fallback_reason(self) -> &'static str {
        match self {
            Self::Login => "Invalid credentials",
            Self::Register => "Please try again",
        }
    }
}

impl AuthError {
    /// Text shown under the form for this failure.
    pub fn user_message(&self, flow: AuthFlow) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Transport(_) | Self::Decode(_) => format!("{} failed. Please try again.", flow.label()),
            Self::Rejected { message, .. } | Self::MissingToken { message } => format!(
                "{} failed: {}",
                flow.label(),
                message.as_deref().filter(|m| !m.trim().is_empty()).unwrap_or(flow.fallback_reason())
            ),
            Self::Unauthorized => format!("{} failed: {}", flow.label(), flow.fallback_reason()),
        }
    }
}
