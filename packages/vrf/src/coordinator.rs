use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, HexBinary, StdResult};

/// The request interface of the randomness coordinator.
///
/// A consuming contract sends this message to the coordinator and gets the
/// fulfillment later as an independent transaction. The coordinator makes no
/// latency guarantee beyond eventual delivery.
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    /// Requests `num_words` random words.
    RequestRandomWords {
        /// A correlation ID chosen by the caller. It is echoed in the
        /// callback and must be fresh for every request.
        request_id: u64,
        /// The coordinator subscription paying for this request
        subscription_id: u64,
        /// Gas price lane the coordinator uses for the callback transaction
        gas_lane: HexBinary,
        /// Number of confirmations the coordinator waits before the
        /// request counts as committed
        request_confirmations: u32,
        /// Gas budget the coordinator grants the callback execution
        callback_gas_limit: u32,
        num_words: u32,
    },
}

/// The randomness delivery sent by the coordinator to the requesting
/// contract once the random words are available.
#[cw_serde]
pub struct RandomnessCallback {
    /// The ID chosen by the caller in the request
    pub request_id: u64,
    /// The delivered random words, 32 bytes each
    pub random_words: Vec<HexBinary>,
}

impl RandomnessCallback {
    /// Serializes the callback into the receiver's execute message
    pub fn into_wrapped_binary(self) -> StdResult<Binary> {
        let msg = ReceiverExecuteMsg::RandomnessReceive { callback: self };
        to_json_binary(&msg)
    }
}

/// This is just a helper to properly serialize the callback message.
/// The actual receiver should include this variant in its larger ExecuteMsg enum.
#[cw_serde]
pub enum ReceiverExecuteMsg {
    RandomnessReceive { callback: RandomnessCallback },
}
