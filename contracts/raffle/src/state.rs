use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, HexBinary, Timestamp};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Address of the coordinator contract randomness requests are sent to
    pub coordinator: Addr,
    /// Minimum payment to register one participation
    pub entrance_fee: Coin,
    /// Seconds that must pass after a round start before it can be closed
    pub min_interval: u64,
    /// The coordinator subscription that funds the requests
    pub subscription_id: u64,
    /// Coordinator specific gas price lane for the callback transaction
    pub gas_lane: HexBinary,
    /// Confirmations the coordinator waits before the request counts as committed
    pub request_confirmations: u32,
    /// Gas budget the coordinator grants the callback execution
    pub callback_gas_limit: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
pub enum RoundStatus {
    /// Accepting entries
    Open,
    /// A randomness request is in flight. No entries are accepted and the
    /// round cannot be closed again until the request is fulfilled.
    Calculating { request_id: u64 },
}

#[cw_serde]
pub struct Round {
    pub status: RoundStatus,
    /// Block time of the last reset (or of instantiation)
    pub started_at: Timestamp,
}

impl Round {
    pub fn pending_request_id(&self) -> Option<u64> {
        match self.status {
            RoundStatus::Open => None,
            RoundStatus::Calculating { request_id } => Some(request_id),
        }
    }
}

pub const ROUND: Item<Round> = Item::new("round");

/// Details of an in-flight randomness request
#[cw_serde]
pub struct RandomnessRequest {
    /// Block height at which the request was issued
    pub height: u64,
    /// Block time at which the request was issued
    pub requested_at: Timestamp,
}

/// Outstanding requests by request ID. With a single round there is at most
/// one entry at a time, but the keyed shape allows overlapping rounds later.
pub const REQUESTS: Map<u64, RandomnessRequest> = Map::new("requests");

/// The last used request ID
pub const REQUESTS_LAST_ID: Item<u64> = Item::new("requests_id");

/// Winner of the most recently settled round
pub const LAST_WINNER: Item<Addr> = Item::new("last_winner");
