use cosmwasm_std::StdError;
use thiserror::Error;

/// Every message below is matched literally by clients; keep the text stable.
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Source Name must not be empty")]
    EmptySourceName,

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Points must be greater than 0")]
    ZeroPoints,

    #[error("function was called with incorrect parameters")]
    InvalidRarity { value: u32 },

    #[error("Requested metadata not exist")]
    MetadataNotFound { metadata_id: u64 },

    #[error("You are not the owner of the metadata")]
    NotMetadataOwner,

    #[error("Source can't award itself")]
    SelfAward,

    #[error("Wallet already own the achievement")]
    DuplicateAchievement { metadata_id: u64, user: String },

    #[error("Offset is greater than number of records available")]
    OffsetOutOfRange { offset: u32, available: u64 },

    #[error("The Archievement NFT is soul bound to the user")]
    Soulbound,

    #[error("token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
