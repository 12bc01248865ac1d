mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use weekpick::output::Format;

/// weekpick - weekly menu and lottery picks
#[derive(Parser)]
#[command(name = "weekpick")]
#[command(about = "Weekly menu recommendations and lottery number picks", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a Monday to Friday menu from the ingredients at hand
    Plan {
        /// Ingredients separated by commas or newlines (read from stdin if omitted)
        #[arg(long, short)]
        ingredients: Option<String>,

        /// Recipe catalog TOML file (overrides config file)
        #[arg(long)]
        catalog: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Print the plan as a copy block
        #[arg(long)]
        copy: bool,
    },
    /// Draw a batch of lottery tickets
    Lotto {
        /// Number of tickets, clamped to 1..=10 (overrides config file)
        #[arg(long, short)]
        count: Option<usize>,

        /// Sort each ticket ascending
        #[arg(long, conflicts_with = "unsorted")]
        sorted: bool,

        /// Keep draw order
        #[arg(long)]
        unsorted: bool,

        /// Reject duplicate tickets within the batch
        #[arg(long, conflicts_with = "allow_duplicates")]
        unique: bool,

        /// Allow duplicate tickets within the batch
        #[arg(long)]
        allow_duplicates: bool,

        /// Seed for reproducible draws (overrides config file)
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Print the batch as a copy block
        #[arg(long)]
        copy: bool,
    },
    /// Interactive session driving both tools from stdin
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = weekpick::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weekpick::observability::init_observability(
        "weekpick",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Plan {
            ingredients,
            catalog,
            format,
            copy,
        } => cli::plan::run(config, ingredients, catalog, format, copy),
        Commands::Lotto {
            count,
            sorted,
            unsorted,
            unique,
            allow_duplicates,
            seed,
            format,
            copy,
        } => cli::lotto::run(
            config,
            cli::lotto::Args {
                count,
                sorted: cli::flag(sorted, unsorted),
                unique: cli::flag(unique, allow_duplicates),
                seed,
                format,
                copy,
            },
        ),
        Commands::Session => cli::session::run(config),
    }
}
