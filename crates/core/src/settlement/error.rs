//! Reimbursement error types.

use thiserror::Error;
use kitty_shared::AppError;
use kitty_shared::types::ReimbursementId;

use super::reimbursement::ReimbursementStatus;

/// Reimbursement state errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReimbursementError {
    /// Only pending reimbursements can change status.
    #[error("Reimbursement {id} is {status}, expected pending")]
    NotPending {
        /// The reimbursement.
        id: ReimbursementId,
        /// Its current status.
        status: ReimbursementStatus,
    },
}

impl ReimbursementError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotPending { .. } => "REIMBURSEMENT_NOT_PENDING",
        }
    }
}

impl From<ReimbursementError> for AppError {
    fn from(err: ReimbursementError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
