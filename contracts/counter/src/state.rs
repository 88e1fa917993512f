use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

#[cw_serde]
pub struct State {
    pub count: i32,
    /// Only the owner may reset the count
    pub owner: Addr,
}

pub const STATE: Item<State> = Item::new("state");
