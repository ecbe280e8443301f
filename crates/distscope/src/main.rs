use clap::Parser;
use distscope::{App, AppConfig, init_logging};
use distscope_core::Distribution;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "distscope")]
#[command(about = "Terminal histograms of random samples next to their theoretical densities")]
struct Args {
    /// Comma-separated panel sample sizes
    #[arg(short, long, value_delimiter = ',', default_value = "10,50,100")]
    sizes: Vec<usize>,

    /// Degrees of freedom for the Student-t figure
    #[arg(long, default_value_t = Distribution::DEFAULT_DF)]
    df: f64,

    /// Rate for the Poisson figure
    #[arg(long, default_value_t = Distribution::DEFAULT_LAMBDA)]
    lambda: f64,

    /// Seed for reproducible draws (fresh OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (logging is off without it)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    init_logging(args.log_file.as_deref(), &args.log_level)?;

    // Compose every figure before touching the terminal so a bad parameter
    // aborts with a plain error instead of a corrupted screen
    let mut app = App::new(AppConfig {
        sizes: args.sizes,
        df: args.df,
        lambda: args.lambda,
        seed: args.seed,
    })?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
