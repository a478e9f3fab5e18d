//! Compress command implementation.

use crate::utils::{read_input, space_savings, write_output};
use std::path::Path;

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let compressed = oxixca_plain::compress(&data)?;
    write_output(output, &compressed)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        original_len = data.len(),
        compressed_len = compressed.len(),
        "compressed"
    );

    if verbose {
        eprintln!(
            "{} -> {}: {} -> {} bytes ({:.1}% saved)",
            input.display(),
            output.display(),
            data.len(),
            compressed.len(),
            space_savings(data.len(), compressed.len())
        );
    }

    Ok(())
}
