use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

use crate::state::{Achievement, AchievementMetadata};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
}

/// Registration payload. `id` and `source` are assigned by the registry.
#[cw_serde]
pub struct MetadataRequest {
    pub source_name: String,
    /// Raw rarity value, see `state::Rarity` for the accepted range
    pub rarity: u32,
    pub title: String,
    pub description: String,
    pub points: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a new achievement definition owned by the sender
    RegisterAchievement { metadata: MetadataRequest },
    /// Award a definition the sender registered to `user`
    AwardAchievement { user: String, metadata_id: u64 },
    /// Always rejected: achievements are soul-bound
    TransferNft { recipient: String, token_id: u64 },
    /// Always rejected: achievements are soul-bound
    SendNft {
        contract: String,
        token_id: u64,
        msg: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    /// Registered definition by id
    #[returns(AchievementMetadata)]
    Metadata { id: u64 },
    /// Number of registered definitions
    #[returns(NumMetadataResponse)]
    NumMetadata {},
    #[returns(HasAchievementResponse)]
    HasAchievement { user: String, metadata_id: u64 },
    /// Sum of points; an empty `sources` list means every source
    #[returns(PointsResponse)]
    Points { user: String, sources: Vec<String> },
    /// Awards in award order; `limit == 0` returns everything after `offset`
    #[returns(AchievementsResponse)]
    Achievements {
        user: String,
        sources: Vec<String>,
        offset: u32,
        limit: u32,
    },
    #[returns(Achievement)]
    NftInfo { token_id: u64 },
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Total awarded count
    #[returns(NumTokensResponse)]
    NumTokens {},
}

#[cw_serde]
pub struct NumMetadataResponse {
    pub count: u64,
}

#[cw_serde]
pub struct HasAchievementResponse {
    pub has_achievement: bool,
    pub token_id: Option<u64>,
}

#[cw_serde]
pub struct PointsResponse {
    pub points: u64,
}

#[cw_serde]
pub struct AchievementsResponse {
    pub achievements: Vec<Achievement>,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
