//! Decompress command implementation.

use crate::utils::{read_input, write_output};
use oxixca_core::XcaError;
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    max_size: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let compressed = read_input(input)?;
    let data =
        oxixca_plain::decompress(&compressed, max_size).map_err(|e| with_hint(e, max_size))?;
    write_output(output, &data)?;

    if data.len() == max_size && max_size > 0 {
        tracing::debug!(max_size, "output buffer filled, stream may hold more data");
    }

    if verbose {
        eprintln!(
            "{} -> {}: {} -> {} bytes",
            input.display(),
            output.display(),
            compressed.len(),
            data.len()
        );
    }

    Ok(())
}

/// Point at `--max-size` when the output buffer was too small.
fn with_hint(err: XcaError, max_size: usize) -> Box<dyn std::error::Error> {
    if err.is_capacity_error() {
        format!("{} (output limited to {} bytes, raise --max-size)", err, max_size).into()
    } else {
        err.into()
    }
}
