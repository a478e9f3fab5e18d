//! Info command implementation.

use oxixca_plain::{LengthTier, StreamStats};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// JSON serializable stream statistics.
#[derive(Debug, Serialize)]
struct StreamInfoJson {
    file: String,
    compressed_size: usize,
    decoded_size: usize,
    literals: usize,
    matches: usize,
    indicator_words: usize,
    longest_match: usize,
    largest_offset: usize,
    ratio: f64,
    tiers: BTreeMap<&'static str, usize>,
}

impl StreamInfoJson {
    fn from_stats(file: &Path, stats: &StreamStats) -> Self {
        Self {
            file: file.display().to_string(),
            compressed_size: stats.compressed_len,
            decoded_size: stats.decoded_len,
            literals: stats.literals,
            matches: stats.matches,
            indicator_words: stats.indicator_words,
            longest_match: stats.longest_match,
            largest_offset: stats.largest_offset,
            ratio: stats.compression_ratio(),
            tiers: LengthTier::ALL
                .iter()
                .map(|&tier| (tier.name(), stats.tier_count(tier)))
                .collect(),
        }
    }
}

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stream = std::fs::read(input)?;
    let stats = StreamStats::collect(&stream)?;

    if json {
        let info = StreamInfoJson::from_stats(input, &stats);
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", input.display());
    println!("Compressed size: {} bytes", stats.compressed_len);
    println!("Decoded size: {} bytes", stats.decoded_len);
    if stats.decoded_len > 0 {
        println!("Space savings: {:.1}%", stats.space_savings());
    }

    println!();
    println!("Tokens:");
    println!("  Literals: {}", stats.literals);
    println!("  Matches: {}", stats.matches);
    println!("  Indicator words: {}", stats.indicator_words);

    if stats.matches > 0 {
        println!("  Longest match: {} bytes", stats.longest_match);
        println!("  Largest offset: {}", stats.largest_offset);

        println!();
        println!("Match lengths:");
        for tier in LengthTier::ALL {
            println!("  {:<7} {}", tier.name(), stats.tier_count(tier));
        }
    }

    Ok(())
}
