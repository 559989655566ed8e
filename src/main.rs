use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use trackit::cli::{handle_limit_command, handle_show_command, handle_summary_command};
use trackit::config::{paths::TrackItPaths, settings::Settings};
use trackit::display::format_category_rules;
use trackit::services::categorize;
use trackit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "trackit",
    version,
    about = "Terminal expense tracker with auto-categorization and spending limits",
    long_about = "TrackIt reads monthly transaction CSV files, sorts each expense into a \
                  category by keywords in its description, and warns when a category \
                  goes over the limit you set for that month."
)]
struct Cli {
    /// Base directory for settings and data
    #[arg(long, global = true, env = "TRACKIT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month's transactions, totals and limit warnings
    #[command(alias = "month")]
    Show {
        /// Month name, abbreviation or number (defaults to the current month)
        month: Option<String>,
    },

    /// Show the detailed monthly summary
    Summary {
        /// Month name, abbreviation or number (defaults to the current month)
        month: Option<String>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print as JSON
        #[arg(long, conflicts_with = "output")]
        json: bool,
    },

    /// Spending limit commands
    #[command(subcommand)]
    Limit(trackit::cli::LimitCommands),

    /// Show which category a description would be assigned
    Categorize {
        /// Transaction description
        description: String,
    },

    /// List categories and the keywords that select them
    Categories,

    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let paths = match cli.data_dir {
        Some(dir) => TrackItPaths::with_base_dir(dir),
        None => TrackItPaths::new()?,
    };

    match cli.command {
        Some(Commands::Show { month }) => {
            let settings = Settings::load_or_create(&paths)?;
            let storage = Storage::new(paths)?;
            handle_show_command(&storage, &settings, month)?;
        }
        Some(Commands::Summary {
            month,
            output,
            json,
        }) => {
            let settings = Settings::load_or_create(&paths)?;
            let storage = Storage::new(paths)?;
            handle_summary_command(&storage, &settings, month, output, json)?;
        }
        Some(Commands::Limit(cmd)) => {
            let settings = Settings::load_or_create(&paths)?;
            let storage = Storage::new(paths)?;
            handle_limit_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Categorize { description }) => {
            println!("{}", categorize(&description));
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_rules());
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("TrackIt is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }

            println!("Initializing TrackIt at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            Settings::default().save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Put one CSV per month in {}", paths.data_dir().display());
            println!("  e.g. January.csv with rows: date,description,amount");
            println!();
            println!("Run 'trackit show January' to view a month.");
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("TrackIt Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Limits file:     {}", paths.limits_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            if !paths.is_initialized() {
                println!("                 (not written yet, run 'trackit init')");
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            match settings.default_month {
                Some(month) => println!("  Default month:   {}", month),
                None => println!("  Default month:   (current month)"),
            }
        }
        None => {
            println!("TrackIt - expense tracker");
            println!();
            println!("Run 'trackit --help' for usage information.");
            println!("Run 'trackit show' to view the current month.");
        }
    }

    Ok(())
}
