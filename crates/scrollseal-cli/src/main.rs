//! Scrollseal CLI - builds sealed Merkle manifests for scripture corpora.

use clap::{Args, Parser, Subcommand};

mod commands;

use commands::{quran, torah};

#[derive(Parser)]
#[command(name = "scrollseal")]
#[command(about = "Builds sealed Merkle manifests for the Qur'an and Torah sidrot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every corpus subcommand.
#[derive(Args)]
struct CommonArgs {
    /// Directory for manifest output
    #[arg(long, default_value = "out")]
    out_dir: String,
    /// Directory for cached raw responses
    #[arg(long, default_value = "out/cache")]
    cache_dir: String,
    /// Exclusive upper bound for the nonce search
    #[arg(long, default_value_t = scrollseal_core::DEFAULT_NONCE_LIMIT)]
    nonce_limit: u64,
    /// Fail on a unit with zero verses instead of skipping it
    #[arg(long)]
    strict_empty: bool,
    /// Never touch the network; fail on a cache miss
    #[arg(long)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the Qur'an manifest from Tanzil's Uthmani text
    Quran {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Build the Torah sidrot manifest from Sefaria
    Torah {
        /// Path to a JSON list of Sefaria refs for sidrot
        #[arg(long, default_value = "sidrot.json")]
        sidrot: String,
        #[command(flatten)]
        common: CommonArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrollseal=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quran { common } => quran::run(&common),
        Commands::Torah { sidrot, common } => torah::run(&sidrot, &common),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
