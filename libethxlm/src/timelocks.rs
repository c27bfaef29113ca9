//! Deadline schedule for a hashed-timelock exchange.
//!
//! All values are Unix seconds derived from the creation time:
//!
//! | field                 | value                                     |
//! |-----------------------|-------------------------------------------|
//! | `makerExclusiveUntil` | `createdAt + makerTimeout`                |
//! | `takerExclusiveUntil` | `createdAt + duration - takerTimeout`     |
//! | `claimDeadline`       | `createdAt + duration - takerTimeout`     |
//! | `refundDeadline`      | `createdAt + duration`                    |
//!
//! Nothing checks that the offsets are consistent with each other. A `takerTimeout` longer than `duration` yields
//! deadlines before `createdAt`; callers own the sanity of their inputs.

use crate::helpers::Timestamp;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_SECS: i64 = 3600;
pub const DEFAULT_MAKER_TIMEOUT_SECS: i64 = 1800;
pub const DEFAULT_TAKER_TIMEOUT_SECS: i64 = 1800;

/// Offsets, in seconds, used to build a [`TimelockSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelockParams {
    pub duration: i64,
    pub maker_timeout: i64,
    pub taker_timeout: i64,
}

impl TimelockParams {
    pub fn new(duration: i64, maker_timeout: i64, taker_timeout: i64) -> Self {
        Self { duration, maker_timeout, taker_timeout }
    }
}

impl Default for TimelockParams {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS, DEFAULT_MAKER_TIMEOUT_SECS, DEFAULT_TAKER_TIMEOUT_SECS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelockSchedule {
    pub created_at: Timestamp,
    pub duration: i64,
    pub claim_deadline: Timestamp,
    pub refund_deadline: Timestamp,
    pub maker_exclusive_until: Timestamp,
    pub taker_exclusive_until: Timestamp,
}

/// Builds a schedule starting now.
pub fn calculate_timelocks(params: TimelockParams) -> TimelockSchedule {
    calculate_timelocks_at(Timestamp::now(), params)
}

/// Builds a schedule starting at `created_at`.
pub fn calculate_timelocks_at(created_at: Timestamp, params: TimelockParams) -> TimelockSchedule {
    let refund_deadline = created_at.add_secs(params.duration);
    let claim_deadline = refund_deadline.add_secs(params.taker_timeout.saturating_neg());
    TimelockSchedule {
        created_at,
        duration: params.duration,
        claim_deadline,
        refund_deadline,
        maker_exclusive_until: created_at.add_secs(params.maker_timeout),
        taker_exclusive_until: claim_deadline,
    }
}
