//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Read, Write};
use std::path::Path;

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "OXIXCA_LOG";

/// Install the global tracing subscriber.
///
/// Events go to stderr so that `-` outputs stay clean. The filter is read
/// from [`LOG_ENV_VAR`], defaulting to `warn`, or `debug` with `--verbose`.
pub fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    use tracing::metadata::LevelFilter;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr);

    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}");
    if let Ok(style) = style {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}

/// Returns `true` if `path` is `-`, meaning stdin or stdout.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a whole file, or stdin for `-`.
pub fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if is_stdio(path) {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data)?;
        Ok(data)
    } else {
        std::fs::read(path)
    }
}

/// Write `data` to a file, or stdout for `-`.
pub fn write_output(path: &Path, data: &[u8]) -> io::Result<()> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()
    } else {
        std::fs::write(path, data)
    }
}

/// Space savings of `compressed` over `original` bytes, as a percentage.
pub fn space_savings(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        (1.0 - compressed as f64 / original as f64) * 100.0
    }
}
