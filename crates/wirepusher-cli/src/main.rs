mod cli;

use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::info;

use wirepusher_client::{Service, Transport};
use wirepusher_types::{User, UserDirectory};

use crate::cli::{Action, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter(args.verbose).into()),
        )
        .init();

    run(args).await
}

/// Fallback filter when RUST_LOG is unset. `wirepusher` is the binary's own
/// target and also prefixes the library crates' targets.
fn log_filter(verbose: bool) -> &'static str {
    if verbose { "wirepusher=debug" } else { "wirepusher=info" }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let directory = UserDirectory::load(&args.users)?;
    let user = find_user(&directory, &args.user)?;

    let service = Service::with_timeout(Duration::from_secs(args.timeout))?
        .with_base_url(&args.endpoint)?;

    dispatch(&service, &args, &user).await
}

fn find_user(directory: &UserDirectory, username: &str) -> anyhow::Result<User> {
    let entry = directory
        .get(username)
        .ok_or_else(|| anyhow!("user {:?} not found!", username))?;
    Ok(entry.to_user()?)
}

/// Clear with a message id clears that message, clear without one clears
/// the whole tray.
async fn dispatch<T: Transport>(
    service: &Service<T>,
    args: &Args,
    user: &User,
) -> anyhow::Result<()> {
    match args.action {
        Action::Clear if args.msgid != 0 => {
            service
                .clear_one(args.msgid, user)
                .await
                .with_context(|| format!("error clearing message {}", args.msgid))?;
            info!("message cleared!");
        }
        Action::Clear => {
            service
                .clear_all(user)
                .await
                .context("error clearing all messages")?;
            info!("messages cleared!");
        }
        Action::Send => {
            let msg = args.message();
            service
                .send(&msg, user)
                .await
                .context("error sending message")?;
            info!("message sent!");
        }
    }

    Ok(())
}
