//! Derived balance aggregate. Never stored; recomputed on every request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_minutes: i64,
    pub withdrawn_minutes: i64,
    pub balance_minutes: i64,
}
