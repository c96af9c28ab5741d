//! cfstatus - post Codeforces user presence to a Discord webhook.
//!
//! One linear run per invocation: resolve handles, fetch `user.info`,
//! classify online/offline, format the message, deliver it. Repeated runs
//! are an external scheduler's job (cron).

use anyhow::Result;
use cfstatus::{cf_api, config, discord, formatting, status, Args};
use chrono::Utc;
use clap::Parser;

fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let handles = match config::resolve_handles(args.handles.as_deref(), &args.config) {
        Ok(handles) => handles,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let webhook_url = match args.webhook.as_deref() {
        Some(url) => url,
        None => {
            eprintln!("DISCORD_WEBHOOK is not set.");
            std::process::exit(1);
        }
    };

    if args.debug {
        eprintln!("[DEBUG] Handles: {:?}", handles);
        eprintln!("[DEBUG] Online threshold: {}s", args.online_threshold);
        eprintln!("[DEBUG] Config path: {}", args.config.display());
    }

    // Captured once; every entry is evaluated against the same instant.
    let now = Utc::now().timestamp();

    let users = cf_api::fetch_user_info(&handles)?;
    let statuses = status::build_statuses(&users, now, args.online_threshold);
    let message = formatting::format_message(&statuses, now);
    discord::post_to_discord(webhook_url, &message)?;

    println!("Posted status update for: {}", handles.join(", "));
    Ok(())
}
