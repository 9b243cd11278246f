// src/main.rs
use arb_dashboard::adapter::{spawn_stdin_reader, DashboardCoordinator};
use arb_dashboard::application::service::EndpointResolver;
use arb_dashboard::application::usecase::{DashboardController, PriceFetcher};
use arb_dashboard::config::Config;
use arb_dashboard::domain::errors::AppResult;
use arb_dashboard::domain::service::SentimentScorer;
use arb_dashboard::infrastructure::exchange::HyperQuoteTransport;
use arb_dashboard::infrastructure::sentiment::LexiconScorer;

use tokio::signal::ctrl_c;
use tokio::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting arb_dashboard v{}", env!("CARGO_PKG_VERSION"));
    log::info!(
        "Pair {}, alert threshold {:.2}%, cache TTL {}s",
        config.dashboard.pair,
        config.dashboard.threshold_percent,
        config.feeds.cache_ttl_secs
    );

    let transport =
        HyperQuoteTransport::new(Duration::from_secs(config.feeds.request_timeout_secs));
    let fetcher = PriceFetcher::with_ttl(transport, Duration::from_secs(config.feeds.cache_ttl_secs));
    let resolver = EndpointResolver::new(&config.feeds.binance_base_url, &config.feeds.coinbase_base_url);
    let controller = DashboardController::new(resolver, fetcher, SentimentScorer::new(LexiconScorer::new()));

    let mut coordinator = DashboardCoordinator::new(
        controller,
        config.session(),
        spawn_stdin_reader(),
        std::io::stdout(),
        Duration::from_secs(config.dashboard.refresh_interval_secs),
        config.dashboard.history_rows,
    );

    println!("Type 'help' for commands.");

    tokio::select! {
        result = coordinator.run() => result?,
        _ = ctrl_c() => log::info!("Interrupted"),
    }

    log::info!("Shutdown complete. Goodbye!");
    Ok(())
}
