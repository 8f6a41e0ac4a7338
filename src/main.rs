use bedrock_codegen::adapter::inbound::lambda::handle;
use bedrock_codegen::infrastructure::bootstrap::{load_sdk_config, log_startup};
use bedrock_codegen::infrastructure::config::settings::Config;
use lambda_http::{run, service_fn, Request};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let config = match Config::load_or_default("config.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    log_startup(&config);

    let sdk_config = load_sdk_config().await;
    let config = &config;
    let sdk_config = &sdk_config;

    run(service_fn(move |event: Request| async move {
        handle(config, sdk_config, event).await
    }))
    .await
    .inspect_err(|e| error!(error = %e, "Lambda runtime stopped"))
}
