use std::path::Path;

use clap::Parser;
use reqwest::Client;
use tracing::{debug, info};

mod logging;
mod discord;
mod args;
mod config;
mod form;
mod validate;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Parse arguments
    let args = args::Args::parse();

    // Initialize tracing subscriber
    logging::init(args.verbose, args.debug);
    debug!("Running with arguments: \n{:#?}", args);

    // Read in the config. An explicitly named file must exist; otherwise
    // ./config.toml is picked up when present.
    let config = match args.config_file {
        Some(config_file) => match config::read_config(config_file) {
            Ok(config) => config,
            Err(e) => {
                return Err(e);
            }
        },
        None if Path::new("./config.toml").exists() => {
            match config::read_config("./config.toml".to_string()) {
                Ok(config) => config,
                Err(e) => {
                    return Err(e);
                }
            }
        }
        None => config::Config::default(),
    };

    debug!("Using config: {:#?}", config);

    // Fill the form, flags winning over config defaults
    let mut form = form::FormState::new();
    form.set_webhook_url(args.webhook_url.or(config.defaults.webhook_url).unwrap_or_default());
    form.set_message(args.message.unwrap_or_default());
    form.set_username(args.username.or(config.defaults.username).unwrap_or_default());
    form.set_avatar_url(args.avatar_url.or(config.defaults.avatar_url).unwrap_or_default());

    let request = match form.submit() {
        Some(request) => request,
        None => {
            let mut missing = Vec::new();
            if let Some(e) = form.webhook_url_error() {
                missing.push(e);
            }
            if let Some(e) = form.message_error() {
                missing.push(e);
            }
            return Err(missing.join(", "));
        }
    };

    info!("Sending message to the webhook.");
    let client = Client::new();
    let send_task = tokio::spawn(async move { discord::send(&client, &request).await });
    let outcome = match send_task.await {
        Ok(outcome) => outcome,
        Err(e) => {
            return Err(format!("Send task failed: {}", e));
        }
    };

    form.complete(&outcome);
    debug!("Send finished with outcome: {:?}", outcome);

    match form.send_error() {
        None => {
            info!("{}", form.state());
            Ok(())
        }
        Some(e) => Err(e.to_string()),
    }
}
