//! Lanai - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs one subcommand against
//! a compressed trie built from a key file.

use clap::{Parser, Subcommand};
use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_lib::data_structures::LanaiTrie;
use lanai_lib::error::{
    report_error, set_error_reporter, ErrorContext, LanaiError, LanaiResult, TracingErrorReporter,
};
use lanai_lib::keyfile;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build a trie from a key file and query it
    Load {
        /// Key file with one `key` or `key<TAB>value` entry per line
        #[clap(short, long, value_parser)]
        keys: PathBuf,

        /// Keys to look up after loading
        #[clap(short, long)]
        lookup: Vec<String>,

        /// Reject repeated keys instead of overwriting their value
        #[clap(long)]
        no_replace: bool,

        /// Print the trie structure
        #[clap(long)]
        dump: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .map_err(|e| LanaiError::Custom(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Load the trie from `keys`, then print stats, lookups and optionally the dump.
fn run_load(
    config: &LanaiConfig,
    keys: PathBuf,
    lookup: Vec<String>,
    replace: bool,
    dump: bool,
) -> LanaiResult<()> {
    let mut trie = LanaiTrie::with_config(config.trie.to_trie_config());
    let report = keyfile::load_keys(&keys, &mut trie, replace)?;

    println!(
        "{} inserted, {} replaced, {} rejected",
        report.inserted, report.replaced, report.rejected
    );
    println!("{}", trie.stats());

    for key in &lookup {
        match trie.find(key) {
            Ok(Some(value)) => println!("{key}\t{value}"),
            Ok(None) => println!("{key}\t(not found)"),
            Err(e) => println!("{key}\t(error: {e})"),
        }
    }

    if dump {
        print!("{}", trie.render());
    }

    let nodes = trie.destroy();
    info!(nodes, "trie released");
    Ok(())
}

fn run(args: Args) -> LanaiResult<()> {
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command {
        Command::Load {
            keys,
            lookup,
            no_replace,
            dump,
        } => {
            let config = config_loader.load()?;
            init_logging(&config.log)?;
            info!(keys = %keys.display(), "Loading key file");
            run_load(&config, keys, lookup, !no_replace, dump)
        }
        Command::Validate => {
            let config = config_loader.load()?;
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            println!("configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            let default_config = LanaiConfig::default();
            init_logging(&default_config.log)?;
            info!("Generating default configuration");

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    let args = Args::parse();
    if let Err(e) = run(args) {
        let context = ErrorContext::new(e, "lanai");
        if tracing::dispatcher::has_been_set() {
            report_error(context);
        } else {
            // Configuration failed before logging came up
            eprintln!("{context}");
        }
        process::exit(1);
    }
}
