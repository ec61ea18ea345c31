//! The admission gate deciding when a round may be closed.

use cosmwasm_std::{Timestamp, Uint128};

use crate::state::{Round, RoundStatus};

/// Returns true iff closing the round is permitted: the round is open,
/// at least `min_interval` seconds have passed since it started, and at
/// least one paid entry exists.
///
/// This is a pure predicate. It is used by the `IsCloseable` query (polled
/// by the automated trigger) and as the precondition of the close operation,
/// so it must stay free of side effects.
pub fn can_close(
    round: &Round,
    min_interval: u64,
    now: Timestamp,
    players: u32,
    pot: Uint128,
) -> bool {
    let is_open = matches!(round.status, RoundStatus::Open);
    let interval_passed = now >= round.started_at.plus_seconds(min_interval);
    is_open && interval_passed && players > 0 && !pot.is_zero()
}
