//! Command-line and environment argument surface.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cfstatus",
    about = "Post Codeforces user presence to a Discord webhook"
)]
pub struct Args {
    #[arg(
        long,
        env = "CF_HANDLES",
        help = "Comma-separated handles; overrides the config file"
    )]
    pub handles: Option<String>,

    #[arg(long, env = "DISCORD_WEBHOOK", help = "Discord webhook URL to post to")]
    pub webhook: Option<String>,

    #[arg(
        long,
        env = "CF_ONLINE_THRESHOLD_SECONDS",
        default_value_t = 300,
        help = "Seconds since last activity within which a user counts as online"
    )]
    pub online_threshold: i64,

    #[arg(
        long,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Path to the handles config file"
    )]
    pub config: PathBuf,

    #[arg(long, help = "Debug output")]
    pub debug: bool,
}
