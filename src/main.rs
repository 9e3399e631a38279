use bundlecheck::{APP_NAME, VERSION, Validator, cli};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Validate operator bundle manifest fields", long_about = None)]
struct Cli {
    /// Enable debug logging (rejection reasons)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every configured field of a manifest
    Check {
        /// Manifest file (.yaml, .yml, .json or .toml)
        manifest: PathBuf,

        /// TOML file with [[field]] rules (defaults to the standard CSV fields)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run one validator on a single value
    Value {
        /// Validator name, e.g. semver or list_of_strings
        validator: Validator,

        /// Value as a JSON literal
        value: String,

        /// Treat the value as plain text instead of JSON
        #[arg(long)]
        raw: bool,
    },
    /// List the recognized vocabularies
    Vocab {
        /// capabilities, categories or media-types
        name: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Check { manifest, config } => {
            cli::check_manifest_file(&manifest, config.as_deref())
        }
        Commands::Value {
            validator,
            value,
            raw,
        } => cli::check_value(validator, &value, raw),
        Commands::Vocab { name } => cli::list_vocabularies(name.as_deref()).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
