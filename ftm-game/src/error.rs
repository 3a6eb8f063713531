use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("achievements metadata already set up")]
    AlreadySetUp,

    #[error("achievements metadata not set up")]
    NotSetUp,

    #[error("no funds sent")]
    NoFundsSent,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,

    #[error("unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("registry reply carried no metadata id")]
    MissingMetadataId,
}
