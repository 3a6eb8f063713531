use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {
    pub registry: String,
    pub required_achievement_id: u64,
    pub greeting: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Replace the greeting; the sender must hold the required achievement
    SetGreeting { greeting: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    #[returns(GreetingResponse)]
    Greeting {},
}

#[cw_serde]
pub struct GreetingResponse {
    pub greeting: String,
}

#[cw_serde]
pub struct MigrateMsg {}
