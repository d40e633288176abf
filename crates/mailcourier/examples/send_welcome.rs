//! Sends a welcome email using a JSON configuration file.
//!
//! ```sh
//! RUST_LOG=mailcourier=debug cargo run --example send_welcome -- courier.json alice@example.com
//! ```

use anyhow::{Context, Result, bail};
use mailcourier::{Branding, Courier, CourierConfig, WelcomeEmail};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(config_path), Some(to)) = (args.next(), args.next()) else {
        bail!("usage: send_welcome <config.json> <recipient>");
    };

    let config = CourierConfig::from_file(&config_path)
        .await
        .with_context(|| format!("loading {config_path}"))?;
    let mut courier = Courier::new(config)?;
    courier.load_configured_templates().await?;

    if !courier.verify().await {
        bail!("SMTP server rejected the connection or credentials");
    }

    let welcome = WelcomeEmail {
        name: to.split('@').next().unwrap_or_default().to_string(),
        action_url: Some("https://example.com/get-started".into()),
        branding: Branding {
            company_name: Some("Example Inc.".into()),
            ..Branding::default()
        },
        ..WelcomeEmail::default()
    };

    let result = courier.send_welcome(to.as_str(), &welcome).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    courier.close();

    if !result.is_success() {
        bail!("send failed");
    }
    Ok(())
}
