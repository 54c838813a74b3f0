//! Varnan Site - interactive driver
//!
//! Reads UI events from stdin, one per line, feeds them to the navigation and
//! contact form controllers and prints the re-rendered views to stdout.

use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use varnan_site::client::{AsyncContactClient, AsyncContactClientImpl};
use varnan_site::controllers::BodyScrollLock;
use varnan_site::session::{Command, Reply, Session, HELP};
use varnan_site::{Config, ContactClient, ContactFormController, NavController};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout carries the rendered views)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Contact API URL: {}", config.contact_api_url);

    let sync_client = ContactClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client = Arc::new(AsyncContactClientImpl::new(sync_client)) as Arc<dyn AsyncContactClient>;

    let form = ContactFormController::from_config(client, &config).with_metrics(metrics);
    let nav = NavController::new(Arc::new(BodyScrollLock::new()), config.scroll_threshold);
    let mut session = Session::new(form, nav);

    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{}\n\n", HELP).as_bytes()).await?;
    stdout.write_all(session.render().as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let output = match line.parse::<Command>() {
            Ok(command) => match session.handle(command).await {
                Reply::Output(text) => text,
                Reply::Quit => break,
            },
            Err(e) => {
                error!("{}", e);
                format!("{}\n", e)
            }
        };

        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }

    session.close();
    info!("Session closed");
    Ok(())
}
