// Main entry point - dependency wiring and the navigation loop
use std::io;
use std::sync::Arc;

use pulseboard::application::bootstrap::BootstrapService;
use pulseboard::domain::route::RouteTable;
use pulseboard::infrastructure::config::load_app_config;
use pulseboard::infrastructure::http_gateway::HttpGateway;
use pulseboard::presentation::app::App;
use tokio::io::AsyncBufReadExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let cfg = load_app_config()?;

    // Wire the HTTP gateway (infrastructure) into the bootstrap service
    // (application) and the app shell (presentation)
    let gateway = Arc::new(HttpGateway::new(
        cfg.api.profile_url.clone(),
        cfg.api.chart_url.clone(),
    ));
    let bootstrap = BootstrapService::new(gateway);
    let mut app = App::new(bootstrap, RouteTable::standard(), io::stdout());

    println!("Starting pulseboard (enter a path to navigate, 'quit' to exit)");
    app.start(&cfg.ui.initial_path).await?;

    // Each stdin line is a navigation path. EOF or "quit" ends the session.
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let path = line.trim();
        if path.is_empty() {
            continue;
        }
        if path == "quit" {
            break;
        }
        app.navigate(path)?;
    }

    Ok(())
}
