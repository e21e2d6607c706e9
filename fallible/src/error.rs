//! Error types for outcome construction and extraction

use crate::outcome::Discriminant;
use thiserror::Error;

/// Errors produced by the container itself
///
/// Errors raised by caller-supplied closures are never wrapped in this type;
/// they travel through the payload slots untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    /// A payload was absent when the container was built
    #[error("cannot build {slot} outcome from an absent payload")]
    InvalidArgument {
        /// The slot that was left empty
        slot: Discriminant,
    },

    /// An extraction was attempted against the wrong variant
    #[error("{}", mismatch_text(.found, .message))]
    DiscriminantMismatch {
        /// The variant that was actually live
        found: Discriminant,
        /// Diagnostic supplied through `expect` / `expect_error`
        message: Option<String>,
    },
}

impl OutcomeError {
    pub(crate) fn invalid_argument(slot: Discriminant) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(%slot, "rejected absent payload");

        OutcomeError::InvalidArgument { slot }
    }

    pub(crate) fn mismatch(found: Discriminant, message: Option<&str>) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(%found, diagnostic = message, "extraction against wrong variant");

        OutcomeError::DiscriminantMismatch {
            found,
            message: message.map(str::to_owned),
        }
    }

    /// Caller-supplied diagnostic, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            OutcomeError::DiscriminantMismatch { message, .. } => message.as_deref(),
            OutcomeError::InvalidArgument { .. } => None,
        }
    }

    /// Returns true for the unwrap-class failure kind
    pub fn is_mismatch(&self) -> bool {
        matches!(self, OutcomeError::DiscriminantMismatch { .. })
    }
}

fn mismatch_text(found: &Discriminant, message: &Option<String>) -> String {
    match message {
        Some(msg) => msg.clone(),
        None => format!("called an extraction on a {found} outcome"),
    }
}

/// Result type for container operations
pub type Result<T> = std::result::Result<T, OutcomeError>;
