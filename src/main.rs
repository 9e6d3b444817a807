use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use reqwest::Client as HttpClient;
use serde_json::Value;
use sns_slack_forwarder::core::config::ForwarderConfig;
use sns_slack_forwarder::forwarder::handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    sns_slack_forwarder::setup_logging();

    // One pooled client for the lifetime of the execution environment.
    let http_client = HttpClient::new();
    let config = ForwarderConfig::default();
    let http_client_ref = &http_client;
    let config_ref = &config;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(http_client_ref, config_ref, event).await
    }))
    .await
}
