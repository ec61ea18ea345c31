use cosmwasm_std::{
    ensure_eq, entry_point, to_json_binary, BankMsg, Coin, Deps, DepsMut, Env, Event, MessageInfo,
    QueryResponse, Response, StdResult, WasmMsg,
};

use vrf::{CoordinatorExecuteMsg, RandomnessCallback};

use crate::admission::can_close;
use crate::attributes::{ATTR_ACTION, ATTR_PAYOUT, ATTR_PLAYER, ATTR_REQUEST_ID, ATTR_WINNER};
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, IsCloseableResponse, PlayersResponse, PotResponse,
    QueryMsg, RecentWinnerResponse, RoundResponse,
};
use crate::players;
use crate::state::{
    Config, RandomnessRequest, Round, RoundStatus, CONFIG, LAST_WINNER, REQUESTS,
    REQUESTS_LAST_ID, ROUND,
};
use crate::winner::select_winner_index;

const CONTRACT_NAME: &str = concat!("crates.io:", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One random word is enough to pick a winner
const NUM_WORDS: u32 = 1;

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let InstantiateMsg {
        coordinator,
        entrance_fee,
        min_interval,
        subscription_id,
        gas_lane,
        request_confirmations,
        callback_gas_limit,
    } = msg;

    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let coordinator = deps.api.addr_validate(&coordinator)?;
    let config = Config {
        coordinator: coordinator.clone(),
        entrance_fee,
        min_interval,
        subscription_id,
        gas_lane,
        request_confirmations,
        callback_gas_limit,
    };
    CONFIG.save(deps.storage, &config)?;

    let round = Round {
        status: RoundStatus::Open,
        started_at: env.block.time,
    };
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute("coordinator", coordinator))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute_enter(deps, env, info),
        ExecuteMsg::Close {} => execute_close(deps, env, info),
        ExecuteMsg::RandomnessReceive { callback } => execute_receive(deps, env, info, callback),
    }
}

fn execute_enter(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;
    if round.status != RoundStatus::Open {
        return Err(ContractError::NotOpen);
    }

    let receipt = players::deposit(deps.storage, &config.entrance_fee, &info.sender, &info.funds)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "enter")
        .add_event(
            Event::new("raffle-entered")
                .add_attribute(ATTR_PLAYER, info.sender)
                .add_attribute("paid", receipt.paid.to_string())
                .add_attribute("players", receipt.players.to_string())
                .add_attribute("pot", receipt.pot.to_string()),
        ))
}

fn execute_close(deps: DepsMut, env: Env, _info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;
    let num_players = players::players_count(deps.storage)?;
    let pot = players::pot_balance(deps.storage)?;

    if !can_close(&round, config.min_interval, env.block.time, num_players, pot) {
        return Err(ContractError::UpkeepNotNeeded);
    }

    // Gate check, state flip and request issuance all happen in this one
    // contract call. No entry and no second close can interleave.
    let request_id = REQUESTS_LAST_ID.may_load(deps.storage)?.unwrap_or_default() + 1;
    REQUESTS_LAST_ID.save(deps.storage, &request_id)?;
    REQUESTS.save(
        deps.storage,
        request_id,
        &RandomnessRequest {
            height: env.block.height,
            requested_at: env.block.time,
        },
    )?;
    ROUND.save(
        deps.storage,
        &Round {
            status: RoundStatus::Calculating { request_id },
            started_at: round.started_at,
        },
    )?;

    let msg = WasmMsg::Execute {
        contract_addr: config.coordinator.into(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords {
            request_id,
            subscription_id: config.subscription_id,
            gas_lane: config.gas_lane,
            request_confirmations: config.request_confirmations,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute(ATTR_ACTION, "close")
        .add_event(
            Event::new("raffle-round-closed")
                .add_attribute(ATTR_REQUEST_ID, request_id.to_string()),
        ))
}

fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    callback: RandomnessCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // Only the coordinator may deliver randomness. Otherwise anyone could
    // pick the winner by sending a value of their choice.
    ensure_eq!(
        info.sender,
        config.coordinator,
        ContractError::UnauthorizedReceive
    );

    let RandomnessCallback {
        request_id,
        random_words,
    } = callback;

    // Reject ids that were never issued or are already consumed, without
    // touching any state. This also makes replays of a settled request a no-op.
    if REQUESTS.may_load(deps.storage, request_id)?.is_none() {
        return Err(ContractError::UnknownRequest { request_id });
    }
    let round = ROUND.load(deps.storage)?;
    if round.pending_request_id() != Some(request_id) {
        return Err(ContractError::UnknownRequest { request_id });
    }

    let randomness: [u8; 32] = random_words
        .first()
        .ok_or(ContractError::InvalidRandomness)?
        .to_array()
        .map_err(|_| ContractError::InvalidRandomness)?;

    // The sequence is non-empty here: it was non-empty at close time and no
    // entries are accepted while calculating.
    let num_players = players::players_count(deps.storage)?;
    let index =
        select_winner_index(randomness, num_players).ok_or(ContractError::NoParticipants)?;
    let winner = players::get_player(deps.storage, index)?.ok_or(ContractError::NoParticipants)?;

    let payout = players::drain_pot(deps.storage)?;
    players::reset(deps.storage)?;
    REQUESTS.remove(deps.storage, request_id);
    ROUND.save(
        deps.storage,
        &Round {
            status: RoundStatus::Open,
            started_at: env.block.time,
        },
    )?;
    LAST_WINNER.save(deps.storage, &winner)?;

    // If this transfer fails the whole transaction reverts, leaving the round
    // calculating with the pot and the outstanding request untouched.
    let msg = BankMsg::Send {
        to_address: winner.to_string(),
        amount: vec![Coin {
            denom: config.entrance_fee.denom,
            amount: payout,
        }],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute(ATTR_ACTION, "receive")
        .add_event(
            Event::new("raffle-winner-picked")
                .add_attribute(ATTR_WINNER, winner)
                .add_attribute(ATTR_PAYOUT, payout.to_string())
                .add_attribute(ATTR_REQUEST_ID, request_id.to_string()),
        ))
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::Round {} => to_json_binary(&query_round(deps)?)?,
        QueryMsg::Players {} => to_json_binary(&query_players(deps)?)?,
        QueryMsg::Pot {} => to_json_binary(&query_pot(deps)?)?,
        QueryMsg::IsCloseable {} => to_json_binary(&query_is_closeable(deps, env)?)?,
        QueryMsg::RecentWinner {} => to_json_binary(&query_recent_winner(deps)?)?,
    };
    Ok(response)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse { config })
}

fn query_round(deps: Deps) -> StdResult<RoundResponse> {
    let round = ROUND.load(deps.storage)?;
    Ok(RoundResponse {
        pending_request_id: round.pending_request_id(),
        status: round.status,
        started_at: round.started_at,
    })
}

fn query_players(deps: Deps) -> StdResult<PlayersResponse> {
    Ok(PlayersResponse {
        players: players::all_players(deps.storage)?,
    })
}

fn query_pot(deps: Deps) -> StdResult<PotResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PotResponse {
        pot: Coin {
            denom: config.entrance_fee.denom,
            amount: players::pot_balance(deps.storage)?,
        },
    })
}

fn query_is_closeable(deps: Deps, env: Env) -> StdResult<IsCloseableResponse> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;
    let num_players = players::players_count(deps.storage)?;
    let pot = players::pot_balance(deps.storage)?;
    Ok(IsCloseableResponse {
        closeable: can_close(&round, config.min_interval, env.block.time, num_players, pot),
    })
}

fn query_recent_winner(deps: Deps) -> StdResult<RecentWinnerResponse> {
    Ok(RecentWinnerResponse {
        winner: LAST_WINNER.may_load(deps.storage)?,
    })
}
