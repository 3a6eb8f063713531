use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Fixed at instantiation
#[cw_serde]
pub struct Config {
    pub registry: Addr,
    /// Registry metadata id a caller must hold to change the greeting
    pub required_achievement_id: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const GREETING: Item<String> = Item::new("greeting");
