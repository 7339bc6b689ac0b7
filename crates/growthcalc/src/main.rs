use clap::Parser;
use growthcalc::{App, CalculatorConfig, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "growthcalc")]
#[command(about = "A terminal-based investment growth calculator")]
struct Args {
    /// Path to the data directory (default: ~/.growthcalc/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Starting principal, clamped to the configured range
    #[arg(short, long)]
    principal: Option<f64>,

    /// Starting duration in months, clamped to the configured range
    #[arg(short, long)]
    months: Option<f64>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".growthcalc")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = CalculatorConfig::load_or_init(&data_dir);
    let mut app = App::new(config, data_dir);
    app.seed_input(args.principal, args.months);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
