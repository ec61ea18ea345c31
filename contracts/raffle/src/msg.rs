use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, HexBinary, Timestamp};

use vrf::RandomnessCallback;

use crate::state::{Config, RoundStatus};

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the coordinator contract randomness requests are sent to
    pub coordinator: String,
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

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers the sender for the current round. The attached funds must
    /// cover the entrance fee.
    Enter {},
    /// Closes the current round and requests randomness for the winner
    /// selection. Normally sent by the automated trigger once `IsCloseable`
    /// turns true, but anyone may call it.
    Close {},
    /// Randomness delivery. Only accepted from the coordinator.
    RandomnessReceive { callback: RandomnessCallback },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// The current round's lifecycle state
    #[returns(RoundResponse)]
    Round {},
    /// All entries of the current round in entry order
    #[returns(PlayersResponse)]
    Players {},
    /// The fees collected in the current round
    #[returns(PotResponse)]
    Pot {},
    /// Readiness check for the automated trigger. Free of side effects and
    /// safe to poll at any frequency.
    #[returns(IsCloseableResponse)]
    IsCloseable {},
    /// Winner of the most recently settled round, if any round settled yet
    #[returns(RecentWinnerResponse)]
    RecentWinner {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub config: Config,
}

#[cw_serde]
pub struct RoundResponse {
    pub status: RoundStatus,
    pub started_at: Timestamp,
    /// Set if and only if the round is calculating
    pub pending_request_id: Option<u64>,
}

#[cw_serde]
pub struct PlayersResponse {
    pub players: Vec<Addr>,
}

#[cw_serde]
pub struct PotResponse {
    pub pot: Coin,
}

#[cw_serde]
pub struct IsCloseableResponse {
    pub closeable: bool,
}

#[cw_serde]
pub struct RecentWinnerResponse {
    pub winner: Option<Addr>,
}
