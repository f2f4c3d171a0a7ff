// Rust guideline compliant 2026-10-14

//! Linemerge CLI Application
//!
//! Reads every source concurrently, sorts the combined lines, and replaces the
//! output file with the result.

use clap::Parser;
use linemerge_cli::commands::merge::{self, MergeArgs};
use linemerge_cli::{create_formatter, logging, should_use_color, terminal};
use linemerge_core::LineOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linemerge",
    version,
    about = "Concurrently merge and sort the lines of many text files",
    long_about = "linemerge reads every source file concurrently, combines their lines, sorts them, and atomically replaces the output file. If any source cannot be read, nothing is written.",
    after_help = "Examples:\n  linemerge a.txt b.txt -o merged.txt\n  linemerge --sources-from list.txt -o merged.txt --order case-insensitive\n  linemerge logs/*.txt -o all.txt --jobs 4 --json\n"
)]
struct Cli {
    /// Source files to merge
    sources: Vec<String>,

    /// File listing additional sources, one per line
    #[arg(long, value_name = "FILE")]
    sources_from: Option<PathBuf>,

    /// Output file (replaced on success)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Sort order for merged lines
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    /// Maximum number of sources read at once [default: 4 per CPU]
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Custom config file path
    #[arg(long, value_name = "FILE", env = "LINEMERGE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable JSON output
    #[arg(long)]
    json: bool,

    /// Report progress on stderr
    #[arg(long)]
    progress: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level (error, warn, info, debug)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Append JSON log records to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OrderArg {
    Lexical,
    CaseInsensitive,
    Reverse,
}

impl From<OrderArg> for LineOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Lexical => LineOrder::Lexical,
            OrderArg::CaseInsensitive => LineOrder::CaseInsensitive,
            OrderArg::Reverse => LineOrder::Reverse,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let guard = logging::init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let use_color = !cli.no_color && should_use_color();
    let formatter = create_formatter(cli.json);

    let args = MergeArgs {
        sources: cli.sources,
        sources_from: cli.sources_from,
        output: cli.output,
        order: cli.order.map(LineOrder::from),
        jobs: cli.jobs,
        config: cli.config,
        progress: cli.progress,
        use_color,
    };

    match merge::execute(args) {
        Ok(report) => {
            println!("{}", formatter.format_report(&report));
            Ok(())
        }
        Err(error) => {
            if cli.json {
                println!("{}", formatter.format_error(&error));
            } else {
                terminal::print_error(&formatter.format_error(&error), use_color);
            }
            drop(guard);
            std::process::exit(1);
        }
    }
}
