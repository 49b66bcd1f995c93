use clap::Parser;
use product_datasheet_api::{Config, init_tracing, install_crypto_provider, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing();
    install_crypto_provider();

    tracing::info!(base_url = %config.base_url, "starting datasheet service");
    serve(config).await
}
