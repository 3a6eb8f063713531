use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("You don't have the required achievement")]
    MissingAchievement,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
