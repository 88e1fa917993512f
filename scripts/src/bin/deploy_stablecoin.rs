use cw_orch::{
    prelude::{DaemonBuilder, TxHandler},
    tokio::runtime::Runtime,
};
use scripts::deploy::deploy_stablecoin;
use scripts::PION_1;

fn deploy() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    pretty_env_logger::init();

    let rt = Runtime::new()?;
    let chain = DaemonBuilder::default()
        .chain(PION_1)
        .handle(rt.handle())
        .build()?;

    let sender = chain.sender().to_string();
    deploy_stablecoin(chain, sender)?;

    Ok(())
}

fn main() {
    deploy().unwrap()
}
