mod counter;
pub use counter::Counter;
pub use dsc_protocol::counter::{
    ExecuteMsgFns as CounterExecuteMsgFns, QueryMsgFns as CounterQueryMsgFns,
};

mod engine;
pub use dsc_protocol::engine::{
    ExecuteMsgFns as DscEngineExecuteMsgFns, QueryMsgFns as DscEngineQueryMsgFns,
};
pub use engine::DscEngine;

mod mock_pyth;
pub use dsc_protocol::mock_pyth::ExecuteMsgFns as MockPythExecuteMsgFns;
pub use mock_pyth::MockPyth;

mod oracle;
pub use dsc_protocol::oracle::QueryMsgFns as OracleQueryMsgFns;
pub use oracle::Oracle;

mod stablecoin;
pub use stablecoin::Stablecoin;
