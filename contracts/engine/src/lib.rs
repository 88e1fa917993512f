pub mod contract;
mod error;
pub mod queries;
pub mod state;

pub use crate::error::ContractError;
