use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (1 MB)
pub(crate) const MAX_LOG_SIZE: u64 = 1024 * 1024;

/// Move an oversized log aside so the new run starts on a fresh file.
/// The previous contents survive one rotation under `<file>.old`.
pub(crate) fn rotate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    let Ok(metadata) = fs::metadata(log_path) else {
        return Ok(());
    };
    if metadata.len() <= MAX_LOG_SIZE {
        return Ok(());
    }

    let mut rotated = log_path.as_os_str().to_owned();
    rotated.push(".old");
    fs::rename(log_path, &rotated)
}

/// Initialize logging to an optional file.
///
/// The TUI owns stdout and stderr, so without a `log_file` nothing is
/// logged anywhere. The level comes from `level` or the `RUST_LOG`
/// environment variable, and the file rotates once it passes 1MB.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> color_eyre::Result<()> {
    let Some(log_path) = log_file else {
        return Ok(());
    };

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Rotate log if needed before opening
    if let Err(e) = rotate_log_if_needed(log_path) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    // Open log file for appending
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    // Build filter from RUST_LOG env var or use provided level
    let default_filter = format!("distscope={level},distscope_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "distscope logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}
