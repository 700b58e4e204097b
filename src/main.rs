use anyhow::Result;

use scout::app::run_app;
use scout::cli::Config;
use scout::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = Config::from_args();
    run_app(config).await
}
