//! Error type shared by the face generator and the samplers.

use std::fmt;

/// Failures raised before any geometry is produced.
///
/// Generation itself has no recoverable failure modes: every input reaching
/// the geometry core is produced internally, so errors are limited to bad
/// parameters and violated preconditions.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    InvalidParams { reason: String },
    Precondition { reason: String },
}

impl GenError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(reason: impl Into<String>) -> Self {
        Self::Precondition {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::Precondition { reason } => write!(f, "precondition violated: {reason}"),
        }
    }
}

impl std::error::Error for GenError {}
