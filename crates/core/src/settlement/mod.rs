//! Settlement of net positions.
//!
//! - Settlement strategies (greedy two-cursor matching)
//! - Settlement types
//! - Reimbursement drafts generated from settlements

pub mod error;
pub mod optimizer;
pub mod reimbursement;
pub mod types;

#[cfg(test)]
mod optimizer_props;

pub use error::ReimbursementError;
pub use optimizer::{GreedySettlement, SettlementStrategy};
pub use reimbursement::{ReimbursementDraft, ReimbursementStatus, generate_reimbursements};
pub use types::Settlement;
