//! Error types for block-average analysis.

use thiserror::Error;

/// Errors produced while validating inputs to a block-average computation.
///
/// Validation failures are reported immediately to the caller; no partial
/// table is ever returned. The single-block "undefined standard error" case
/// is deliberately *not* an error: it is flagged on the affected row via
/// [`BlockRow::se`](crate::BlockRow) being `None` so the remaining rows can
/// still be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockingError {
    /// A supplied parameter failed validation.
    ///
    /// `parameter` names the offending argument (`"x"`, `"block_sizes"` or
    /// `"n_blocks"`); `reason` describes the violated constraint.
    #[error("invalid `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },
}

impl BlockingError {
    /// Construct an `InvalidArgument` error for the named parameter.
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the parameter this error refers to.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter, .. } => parameter,
        }
    }
}
