use clap::Parser;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use product_datasheet_api::lambda::handle_event;
use product_datasheet_api::{AppState, Config, init_tracing, install_crypto_provider};
use serde_json::Value;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    install_crypto_provider();

    // Lambda has no argv to speak of; settings come from the environment.
    let config = Config::try_parse_from(["lambda"])?;
    let state = Arc::new(AppState::new(config)?);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let state = Arc::clone(&state);
        async move { Ok::<Value, Error>(handle_event(&state, event).await) }
    }))
    .await
}
