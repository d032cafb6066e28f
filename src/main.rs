use anyhow::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use diet::cli::{self, parse_finite, parse_non_negative, EatArgs, FoodSource};
use diet::config::DietConfig;
use diet::store::Store;

#[derive(Parser, Debug)]
#[command(
    name = "diet",
    version,
    about = "Minimalistic calorie tracker. Remembers the total calorie consumption per day.",
    arg_required_else_help = true
)]
struct Cli {
    /// Directory holding the store file (defaults to the per-OS data directory)
    #[arg(long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add calories to the daily calorie count
    #[command(group(ArgGroup::new("source").required(true).args(["food", "calories"])))]
    Eat {
        /// The name of the food to add
        #[arg(value_name = "FOOD")]
        food: Option<String>,
        /// The number of calories per portion to add, instead of FOOD
        #[arg(short, long, value_name = "CAL", allow_negative_numbers = true, value_parser = parse_finite)]
        calories: Option<f64>,
        /// The number of portions to add
        #[arg(short, long, value_name = "NUM", default_value_t = 1.0, value_parser = parse_non_negative)]
        number: f64,
        /// Use yesterday instead of today. Repeat to go further back
        #[arg(short, long, action = ArgAction::Count)]
        yesterday: u8,
    },
    /// Remember the calories of an item of food
    Remember {
        /// The name of the food to remember
        #[arg(value_name = "FOOD")]
        food: String,
        /// Calories of one portion
        #[arg(value_name = "CAL", value_parser = parse_non_negative)]
        calories: f64,
        /// An optional description
        #[arg(value_name = "DESC", default_value = "")]
        description: String,
    },
    /// Remove a food from the database
    Forget {
        /// The name of the food to remove
        #[arg(value_name = "FOOD")]
        food: String,
    },
    /// Look up a food in the database
    Lookup {
        /// Only match a food named exactly STRING
        #[arg(short, long)]
        exact: bool,
        /// The string to look for
        #[arg(value_name = "STRING")]
        food: String,
    },
    /// Set the targeted total calories per day (0 clears it)
    Set {
        /// Daily calorie target; shows the current one when omitted
        #[arg(value_name = "TARGET", value_parser = parse_non_negative)]
        target: Option<f64>,
    },
    /// Show how many calories you've consumed
    Status {
        /// Show yesterday instead of today. Repeat to go further back
        #[arg(short, long, action = ArgAction::Count)]
        yesterday: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DietConfig::load()?;
    if let Some(dir) = &cli.dir {
        config.storage.data_dir = dir.to_string_lossy().into_owned();
    }

    // Log to stderr so stdout only carries command output.
    let filter =
        EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        config = %diet::config::default_config_path().display(),
        store = %config.resolved_db_path().display(),
        "configuration resolved"
    );

    let mut store = Store::load(config.resolved_db_path())?;
    let today = chrono::Local::now().date_naive();
    let display = &config.display;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Eat {
            food,
            calories,
            number,
            yesterday,
        } => {
            let source = match (food, calories) {
                (Some(food), _) => FoodSource::Named(food),
                (None, Some(calories)) => FoodSource::Calories(calories),
                (None, None) => anyhow::bail!("either FOOD or --calories is required"),
            };
            let args = EatArgs {
                source,
                portions: number,
                days_ago: u32::from(yesterday),
            };
            cli::eat(&mut store, &args, today, display, &mut stdout)?;
        }
        Command::Remember {
            food,
            calories,
            description,
        } => {
            cli::remember(&mut store, &food, calories, &description)?;
        }
        Command::Forget { food } => {
            cli::forget(&mut store, &food)?;
        }
        Command::Lookup { exact, food } => {
            cli::lookup(&store, &food, exact, &mut stdout)?;
        }
        Command::Set { target } => {
            cli::set(&mut store, target, &mut stdout)?;
        }
        Command::Status { yesterday } => {
            cli::status(&store, u32::from(yesterday), today, display, &mut stdout)?;
        }
    }

    Ok(())
}
