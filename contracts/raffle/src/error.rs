use thiserror::Error;

use cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Payment is below the entrance fee")]
    FeeTooLow,

    #[error("Wrong coin denom")]
    WrongDenom,

    #[error("Round is not open for entries")]
    NotOpen,

    #[error("Round cannot be closed yet")]
    UpkeepNotNeeded,

    #[error("No randomness request with ID {request_id} is outstanding")]
    UnknownRequest { request_id: u64 },

    #[error("Unauthorized randomness delivery")]
    UnauthorizedReceive,

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("Round has no participants")]
    NoParticipants,
}
