use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl TryFrom<u32> for Rarity {
    type Error = ContractError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rarity::Common),
            1 => Ok(Rarity::Uncommon),
            2 => Ok(Rarity::Rare),
            3 => Ok(Rarity::Epic),
            4 => Ok(Rarity::Legendary),
            _ => Err(ContractError::InvalidRarity { value }),
        }
    }
}

impl From<Rarity> for u32 {
    fn from(rarity: Rarity) -> Self {
        rarity as u32
    }
}

/// A registered achievement definition. Immutable once stored.
#[cw_serde]
pub struct AchievementMetadata {
    /// Registry-assigned, sequential from 1
    pub id: u64,
    /// Contract (or account) that registered the entry; the only one allowed to award it
    pub source: Addr,
    pub source_name: String,
    pub rarity: Rarity,
    pub title: String,
    pub description: String,
    pub points: u64,
}

/// One soul-bound award of a metadata entry to a user
#[cw_serde]
pub struct Achievement {
    pub token_id: u64,
    pub user: Addr,
    /// Snapshot of the metadata at award time
    pub metadata: AchievementMetadata,
    /// Block time of the award
    pub timestamp: Timestamp,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Last assigned metadata id (0 = none registered yet)
pub const METADATA_COUNT: Item<u64> = Item::new("metadata_count");

/// metadata_id -> AchievementMetadata
pub const METADATA: Map<u64, AchievementMetadata> = Map::new("metadata");

/// Next token id to mint; also the total number of awards
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// token_id -> Achievement
pub const TOKENS: Map<u64, Achievement> = Map::new("ach_tokens");

/// Deduplication index: (user, metadata_id) -> token_id
pub const ACHIEVEMENT_INDEX: Map<(&Addr, u64), u64> = Map::new("ach_idx");

/// (user, token_id) -> bool. Token ids only grow, so ascending order is award order.
pub const OWNER_TOKENS: Map<(&Addr, u64), bool> = Map::new("owner_tokens");
