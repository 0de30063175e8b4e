use anyhow::Context;
use numerus::domain::config::ApiConfig;
use numerus::kernel::config::{DEFAULT_CONFIG_FILE, load_config};
use numerus_logger::Logger;
use numerus_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: ApiConfig =
        load_config(Some(DEFAULT_CONFIG_FILE)).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
