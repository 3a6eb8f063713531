use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// Instantiator; the only caller of the privileged entry points
    pub dev: Addr,
    /// Achievement registry this game registers with and awards through
    pub registry: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Registry ids of this game's catalog, in catalog order.
/// Absent until setup runs; filled by the registration replies.
pub const GAME_ACHIEVEMENTS: Item<Vec<u64>> = Item::new("game_achievements");
