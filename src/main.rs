mod catalog;
mod cli;
mod config;
mod display;
mod error;
mod search;
mod timezone;

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::catalog::CityId;
use crate::cli::world_clock::WorldClockArgs;

#[derive(Parser)]
#[command(name = "clock")]
#[command(about = "Display city times and time zones", long_about = None)]
struct Cli {
    /// Path to config file (defaults to ~/.config/clock/config.toml)
    #[arg(short, long, global = true, env = "CLOCK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the local time in your home city and requested cities
    WorldClock {
        /// The ID of your home city (first displayed)
        #[arg(short = 'H', long)]
        home_city: Option<u32>,

        /// List of city IDs to display
        #[arg(short, long, num_args = 1..)]
        requested_cities: Option<Vec<u32>>,

        /// Display times for every city in the catalog
        #[arg(short, long, conflicts_with = "requested_cities")]
        all: bool,

        /// Minimum width of the city column
        #[arg(short = 'w', long, default_value_t = 20)]
        column_width: usize,

        /// Also show country, state, coordinates and ID
        #[arg(short, long)]
        verbose: bool,

        /// Render at this RFC 3339 instant instead of now
        #[arg(long)]
        at: Option<String>,
    },
    /// Search for cities by name and display possible matches
    Search {
        /// City name or partial name to search for
        query: String,

        /// Similarity threshold between 0 and 1
        #[arg(short, long, default_value_t = search::DEFAULT_THRESHOLD)]
        similarity: f64,
    },
    /// Manage world clock user configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current world clock configuration
    Show,
    /// Set the default home city
    SetHome {
        /// City ID to set as home city
        id: u32,
    },
    /// Add a city ID to the default requested cities
    AddCity {
        /// City ID to add to requested list
        id: u32,
    },
    /// Remove a city from the default requested cities
    RemoveCity {
        /// City ID to remove from defaults
        id: u32,
    },
    /// Delete the configuration file and return to defaults
    Reset,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let config_path = cli.config.unwrap_or_else(config::default_path);

    let result = match cli.command {
        Commands::WorldClock {
            home_city,
            requested_cities,
            column_width,
            verbose,
            at,
            all,
        } => cli::world_clock::run(
            &config_path,
            WorldClockArgs {
                home_city: home_city.map(CityId),
                requested_cities: requested_cities
                    .map(|ids| ids.into_iter().map(CityId).collect()),
                column_width,
                verbose,
                at,
                all,
            },
        ),
        Commands::Search { query, similarity } => cli::search::run(&query, similarity),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::config::show(&config_path),
            ConfigCommands::SetHome { id } => cli::config::set_home(&config_path, CityId(id)),
            ConfigCommands::AddCity { id } => cli::config::add_city(&config_path, CityId(id)),
            ConfigCommands::RemoveCity { id } => {
                cli::config::remove_city(&config_path, CityId(id))
            }
            ConfigCommands::Reset => cli::config::reset(&config_path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
