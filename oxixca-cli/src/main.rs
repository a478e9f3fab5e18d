//! OxiXCA CLI - The Oxidized XPRESS codec
//!
//! A Pure Rust command-line front end for MS-XCA Plain LZ77 streams.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{cmd_completions, cmd_compress, cmd_decompress, cmd_info, cmd_test};
use std::path::PathBuf;

/// Default decompression capacity: 64 MiB.
const DEFAULT_MAX_SIZE: usize = 64 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "oxixca")]
#[command(
    author,
    version,
    about = "The Oxidized XPRESS codec - MS-XCA Plain LZ77 compression"
)]
#[command(long_about = "
OxiXCA is a Pure Rust implementation of the MS-XCA Plain LZ77 format.
Streams are raw: no header, no length and no checksum.

Examples:
  oxixca compress input.bin input.lz77
  oxixca decompress input.lz77 output.bin --max-size 1048576
  cat input.bin | oxixca compress - - > input.lz77
  oxixca test *.bin
  oxixca info input.lz77 --json
  oxixca completions bash
")]
struct Cli {
    /// Show verbose output and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a raw Plain LZ77 stream
    #[command(alias = "c")]
    Compress {
        /// Input file ('-' for stdin)
        input: PathBuf,

        /// Output file ('-' for stdout)
        output: PathBuf,
    },

    /// Decompress a raw Plain LZ77 stream
    #[command(alias = "d")]
    Decompress {
        /// Input file ('-' for stdin)
        input: PathBuf,

        /// Output file ('-' for stdout)
        output: PathBuf,

        /// Output capacity in bytes; decoding stops once it is full
        #[arg(short, long, default_value_t = DEFAULT_MAX_SIZE)]
        max_size: usize,
    },

    /// Round-trip files through the codec in memory
    #[command(alias = "t")]
    Test {
        /// Files to test
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Show token statistics of a compressed stream
    #[command(alias = "i")]
    Info {
        /// Compressed stream to inspect
        input: PathBuf,

        /// Output statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = utils::setup_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let result = match cli.command {
        Commands::Compress { input, output } => cmd_compress(&input, &output, cli.verbose),
        Commands::Decompress {
            input,
            output,
            max_size,
        } => cmd_decompress(&input, &output, max_size, cli.verbose),
        Commands::Test {
            files,
            json,
            no_progress,
        } => cmd_test(&files, json, !no_progress, cli.verbose),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Completions { shell } => cmd_completions(shell, &mut Cli::command()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
