//! A coordinator stand-in for integration tests. It records incoming
//! randomness requests; the test code plays the fulfillment side by sending
//! the callback from the mock's address.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Response, StdResult,
};
use cw_storage_plus::Item;

use vrf::CoordinatorExecuteMsg;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum QueryMsg {
    /// The most recently received request, if any
    LastRequest {},
}

#[cw_serde]
pub struct RequestRecord {
    pub request_id: u64,
    pub subscription_id: u64,
    pub num_words: u32,
}

const LAST_REQUEST: Item<RequestRecord> = Item::new("last_request");

pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::default())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: CoordinatorExecuteMsg,
) -> StdResult<Response> {
    match msg {
        CoordinatorExecuteMsg::RequestRandomWords {
            request_id,
            subscription_id,
            num_words,
            ..
        } => {
            LAST_REQUEST.save(
                deps.storage,
                &RequestRecord {
                    request_id,
                    subscription_id,
                    num_words,
                },
            )?;
            Ok(Response::new()
                .add_attribute("action", "request_random_words")
                .add_attribute("request_id", request_id.to_string()))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    match msg {
        QueryMsg::LastRequest {} => to_json_binary(&LAST_REQUEST.may_load(deps.storage)?),
    }
}
