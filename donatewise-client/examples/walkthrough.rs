// donatewise-client/examples/walkthrough.rs
// Log in against a running backend and print the role's dashboard

use anyhow::Context;
use donatewise_client::models::Role;
use donatewise_client::{ClientConfig, DonateWiseClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env().context("reading DONATEWISE_* settings")?;
    let client = DonateWiseClient::connect(&config)
        .with_context(|| format!("building client for {}", config.base_url))?;

    let user = match client.restore().await.context("restoring saved login")? {
        Some(user) => user,
        None => {
            let args: Vec<String> = std::env::args().collect();
            if args.len() < 3 {
                println!("Usage: {} <username> <password>", args[0]);
                println!("  Set DONATEWISE_TOKEN_PATH to keep the login between runs");
                return Ok(());
            }
            match client.login(&args[1], &args[2]).await {
                Ok(user) => user,
                Err(e) => {
                    tracing::error!("Login failed: {}", e.user_message());
                    return Err(anyhow::Error::new(e).context(format!("logging in as {}", args[1])));
                }
            }
        }
    };
    tracing::info!("Logged in as {} ({})", user.username, user.role);

    match user.role {
        Role::Donor => {
            let view = client.donor_dashboard().await;
            if let Some(counts) = view.counts() {
                tracing::info!("Donations: {:?}", counts);
            }
            tracing::info!("Awaiting review: {}", view.awaiting_review());
        }
        Role::Staff => {
            let view = client.staff_dashboard().await;
            if let Some((pct, tier)) = view.capacity() {
                tracing::info!("Center capacity: {}% ({})", pct, tier);
            }
            if let Ok(pending) = &view.pending {
                for donation in pending {
                    tracing::info!("Pending #{}: {}", donation.id, donation.name);
                }
            }
        }
        Role::Driver => {
            let view = client.driver_dashboard().await;
            tracing::info!("Available: {:?}", view.is_available());
            for delivery in view.active() {
                tracing::info!("Delivery #{} is {}", delivery.id, delivery.status);
            }
        }
        Role::Admin => {
            let view = client.admin_dashboard().await;
            let now = chrono::Local::now().naive_local();
            tracing::info!("Donations: {:?}", view.counts());
            tracing::info!("Growth this month: {:?}%", view.growth(now));
            for (center, pct, tier) in view.center_capacity() {
                tracing::info!("{}: {}% ({})", center.name, pct, tier);
            }
        }
    }

    Ok(())
}
