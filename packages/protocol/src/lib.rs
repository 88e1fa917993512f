pub mod asset;
pub mod counter;
pub mod engine;
pub mod mock_pyth;
pub mod oracle;
pub mod querier;

#[cfg(test)]
mod testing;
