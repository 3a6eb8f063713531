use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the achievement registry
    pub registry: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register this game's catalog with the registry (dev only, once)
    SetupAchievementsMetadata {},
    /// Award one of this game's achievements to `user` (dev only)
    AwardAchievementOnlyDev { user: String, metadata_id: u64 },
    /// Play through the dungeon, earning every achievement not held yet
    Adventure {},
    /// Top up the game's balance
    SupplyFunds {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    /// Registry ids of this game's catalog
    #[returns(GameAchievementsResponse)]
    Achievements {},
    #[returns(BalanceResponse)]
    Balance { denom: String },
}

#[cw_serde]
pub struct GameAchievementsResponse {
    pub metadata_ids: Vec<u64>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub amount: Coin,
}

#[cw_serde]
pub struct MigrateMsg {}
