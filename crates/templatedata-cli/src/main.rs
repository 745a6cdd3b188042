//! TemplateData CLI - validate, project and tabulate template parameter documentation.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{project, table, validate};

#[derive(Parser)]
#[command(name = "templatedata")]
#[command(about = "TemplateData validation and inspection CLI")]
struct Cli {
    /// Content language used to tag bare description strings
    #[arg(long, global = true, env = "TEMPLATEDATA_LANG", default_value = "en")]
    content_lang: String,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a document and print its canonical JSON
    Validate {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Print the validation outcome as JSON instead
        #[arg(long)]
        json: bool,
        /// Report unknown parameter keys with their full path
        #[arg(long)]
        qualified_unknown: bool,
    },
    /// Print the document flattened for one language
    Project {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Viewing language (defaults to the content language)
        #[arg(long)]
        lang: Option<String>,
        /// Number paramOrder from 1
        #[arg(long)]
        numbered: bool,
    },
    /// Print the parameter table for one language
    Table {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Viewing language (defaults to the content language)
        #[arg(long)]
        lang: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            input,
            json,
            qualified_unknown,
        } => validate::run(input, &cli.content_lang, json, qualified_unknown),
        Commands::Project {
            input,
            lang,
            numbered,
        } => project::run(input, &cli.content_lang, lang, numbered),
        Commands::Table { input, lang } => table::run(input, &cli.content_lang, lang),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
