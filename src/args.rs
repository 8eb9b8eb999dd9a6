use clap::{Parser};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[derive(Debug)]
pub struct Args {
    /// Webhook URL to post to (required unless set in the config file)
    #[clap(short, long)]
    pub webhook_url: Option<String>,
    /// Message content to send (required)
    #[clap(short, long)]
    pub message: Option<String>,
    /// Override the webhook's display name
    #[clap(short, long)]
    pub username: Option<String>,
    /// Override the webhook's avatar image URL
    #[clap(short, long)]
    pub avatar_url: Option<String>,
    /// Config file to use
    #[clap(short, long)]
    pub config_file: Option<String>,
    /// Enable debug output
    #[clap(long)]
    pub debug: bool,
    /// Enable verbose output
    #[clap(short, long)]
    pub verbose: bool,
}
