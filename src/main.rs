use anyhow::{Context, Result};
use clap::Parser;
use scrollfocus::app::App;
use scrollfocus::cli::Cli;
use scrollfocus::tui::install_panic_hook;
use scrollfocus::utils::{get_log_dir, LOG_FILE_NAME};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.execute()? {
        return Ok(());
    }

    // Set up panic hook to restore terminal on panic
    install_panic_hook();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let config = cli.load_config()?;

    let mut app = App::new(config);
    let result = app.run();

    // Flush buffered log lines before exiting
    drop(guard);

    result
}
