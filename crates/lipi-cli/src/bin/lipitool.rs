use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lipi_cli::commands::{config_ops, snapshot_ops, translit_ops};

#[derive(Parser)]
#[command(name = "lipitool", about = "Lipi transliteration diagnostics")]
struct Cli {
    /// Log engine spans and events to stderr (overrides LIPI_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate one string
    Translit {
        /// Mode name (see `modes`)
        mode: String,
        /// Romanized (or Devanagari) text
        text: String,
        /// Keep a trailing dead consonant without its halanta
        #[arg(long)]
        composing: bool,
        /// Also print the output code points
        #[arg(long)]
        codepoints: bool,
    },
    /// Show long-press variants for a base key
    Variants {
        /// Mode name
        mode: String,
        /// Base key, e.g. "k"
        base_key: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Transliterate inputs from a file and record them to JSONL
    Snapshot {
        /// Mode name
        mode: String,
        /// Path to the input file (one input per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },
    /// Compare current output against a saved snapshot
    DiffSnapshot {
        /// Mode name
        mode: String,
        /// Path to the input file (one input per line)
        input_file: String,
        /// Path to the baseline JSONL snapshot file
        baseline_file: String,
    },
    /// List mode names
    Modes,
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lipi_core=debug,lipi_cli=debug")
    } else {
        EnvFilter::try_from_env("LIPI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Translit {
            mode,
            text,
            composing,
            codepoints,
        } => translit_ops::translit_cmd(&mode, &text, composing, codepoints),
        Command::Variants {
            mode,
            base_key,
            json,
        } => translit_ops::variants_cmd(&mode, &base_key, json),
        Command::Snapshot {
            mode,
            input_file,
            output_file,
        } => snapshot_ops::snapshot_cmd(&mode, &input_file, &output_file),
        Command::DiffSnapshot {
            mode,
            input_file,
            baseline_file,
        } => snapshot_ops::diff_snapshot_cmd(&mode, &input_file, &baseline_file),
        Command::Modes => translit_ops::modes_cmd(),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
