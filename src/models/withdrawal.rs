//! A deduction of minutes from the accumulated balance.

use serde::{Deserialize, Serialize};

/// One row of the `withdrawals` table. Immutable after creation
/// except by deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: String,
    pub minutes: i64,
    pub reason: Option<String>,
    pub withdrawn_at: i64,
}
