// movedesk - terminal front desk for the Exxo Move service catalogue
//
// Architecture:
// - Content: bundled catalogue (FAQ, gallery, testimonials, add-ons),
//   parsed section by section so one broken section doesn't take the
//   rest down
// - State machines (faq, pricing, forms, reveal): pure, headless,
//   tested without a terminal
// - TUI (ratatui): renders the state and routes input through layered
//   dispatch
// - Analytics: in-memory event sink mirrored to tracing

mod analytics;
mod cli;
mod config;
mod content;
mod faq;
mod forms;
mod logging;
mod pricing;
mod reveal;
mod theme;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use content::SiteContent;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if !cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs are captured into a ring buffer instead of stdout, which the
    // TUI owns for the whole run; the status bar surfaces problems.
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("movedesk={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must stay alive for the duration of the program so logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Writes happen in a background thread; file layer is JSON
                // for structured parsing later
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!(version = config::VERSION, theme = %config.theme, "starting movedesk");

    // Bundled catalogue; broken sections degrade to empty with a warning
    let content = SiteContent::load();
    tracing::debug!(
        faq = content.faq.len(),
        gallery = content.gallery.len(),
        testimonials = content.testimonials.len(),
        addons = content.addons.len(),
        "content loaded"
    );

    // Blocks until the user quits (presses 'q')
    tui::run(content, config, log_buffer)?;

    tracing::info!("shutdown complete");
    Ok(())
}
