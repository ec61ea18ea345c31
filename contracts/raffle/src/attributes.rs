//! Stable event attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients rely on them.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";

/// Correlation ID of the randomness request issued at round close
pub const ATTR_REQUEST_ID: &str = "request_id";

/// Address that entered the current round
pub const ATTR_PLAYER: &str = "player";

/// Address the round's pot was paid to
pub const ATTR_WINNER: &str = "winner";

/// Amount paid to the winner
pub const ATTR_PAYOUT: &str = "payout";
