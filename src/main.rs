use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use picfetch::application::{ImageFetcher, ImageService, LoadGalleryUseCase, LoadImageUseCase};
use picfetch::domain::entities::DeliveryPlan;
use picfetch::infrastructure::{
    AppConfig, CliArgs, Command, ConfigError, MemoryImageCache, ReqwestTransport, StorageManager,
};
use picfetch::presentation::ConsoleRenderer;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, Option<ConfigError>)> {
    let storage = StorageManager::new()?;
    let mut loaded = storage.load_config(args.config.as_deref())?;
    loaded.config.merge_with_args(args);
    Ok((loaded.config, loaded.fallback))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let (config, fallback) = load_config(&args)?;

    init_logging(&config)?;

    if let Some(e) = fallback {
        warn!(error = %e, "Failed to parse config file, using defaults");
    }

    info!(version = picfetch::VERSION, delivery = %config.delivery, "Starting picfetch");

    let transport = Arc::new(ReqwestTransport::new(&config.http)?);
    let cache = Arc::new(MemoryImageCache::new());
    let service = ImageService::new(cache.clone(), ImageFetcher::new(transport));
    let renderer = Arc::new(ConsoleRenderer::new());
    let loader = LoadImageUseCase::new(service, renderer.clone(), config.delivery);

    match args.command {
        Command::Fetch { urls } => {
            let mut failed = 0;
            for url in &urls {
                if loader.execute(url).await.is_err() {
                    failed += 1;
                }
            }

            println!("{}", cache.stats());

            if failed > 0 {
                return Err(eyre!("{failed} of {} loads failed", urls.len()));
            }
        }
        Command::Gallery { urls, count, cycle } => {
            let urls = if urls.is_empty() {
                config
                    .feed
                    .build(count.unwrap_or(config.feed.page_size))
                    .into_urls()
            } else {
                urls
            };

            let plan = if cycle {
                DeliveryPlan::Cycle
            } else {
                DeliveryPlan::Fixed(config.delivery)
            };

            let report = LoadGalleryUseCase::new(loader, plan).execute(&urls).await;
            renderer.summary(&report);

            if !report.all_succeeded() {
                return Err(eyre!("{} of {} loads failed", report.failed(), urls.len()));
            }
        }
    }

    Ok(())
}
