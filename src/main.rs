use log::{error, info, warn};
use poll_tally::config::Config;
use poll_tally::snapshot::load_polls_async;
use poll_tally::tasks;
use poll_tally::voting::summary::calculate_results;

#[tokio::main]
async fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };

    let polls = match load_polls_async(&config.snapshot_path).await {
        Ok(polls) => polls,
        Err(e) => {
            error!("Failed to load polls from {}: {}", config.snapshot_path.display(), e);
            return;
        }
    };

    if polls.is_empty() {
        warn!("No polls found in {}", config.snapshot_path.display());
    }
    info!("Loaded {} poll(s)", polls.len());

    for poll in &polls {
        let results = calculate_results(poll);
        println!("{}\n", results.summary);
    }

    if config.watch {
        tasks::poll_watcher::watch_polls(config).await;
    }
}
