use anyhow::Result;
use clap::{Parser, Subcommand};
use llproto_cli::{commands, config::parse_byte, FrameArgs};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "llproto")]
#[command(about = "llproto - Byte-stuffed framing for fixed-size messages", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    frame: FrameArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Frame a raw file, one payload-sized chunk per frame
    Pack {
        /// Input file with raw payload bytes
        #[arg(short, long)]
        input: String,

        /// Output file for the framed stream
        #[arg(short, long)]
        output: String,

        /// Pad a trailing partial chunk with this byte
        #[arg(long, value_parser = parse_byte)]
        pad: Option<u8>,
    },

    /// Scan a captured stream and report recovered frames
    Scan {
        /// Input file to scan
        #[arg(short, long)]
        input: String,

        /// Output JSON file for recovered frames
        #[arg(short, long)]
        output: Option<String>,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,
    },

    /// Recover payloads from a captured stream into a raw file
    Unpack {
        /// Input file with framed data
        #[arg(short, long)]
        input: String,

        /// Output file for concatenated payloads
        #[arg(short, long)]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = cli.frame.resolve()?;

    // Execute command
    match cli.command {
        Commands::Pack { input, output, pad } => {
            commands::pack::execute(&config, &input, &output, pad)
        }

        Commands::Scan {
            input,
            output,
            stats_only,
        } => commands::scan::execute(&config, &input, output.as_deref(), stats_only),

        Commands::Unpack { input, output } => commands::unpack::execute(&config, &input, &output),
    }
}
