use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;
use velura::cmd;

/// Velura Botanical Skincare site core
///
/// Browse the catalog, build a morning or evening routine, and take the skin
/// quiz from the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Config file to use instead of ./.velura.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List care steps, products, ingredients or quiz questions
    Catalog {
        /// Listing: steps, products, ingredients, questions
        #[arg(value_name = "LISTING")]
        listing: String,

        /// Only show this category (steps and products)
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a routine and show it for one time of day
    Routine {
        /// Time of day: morning, evening
        #[arg(short, long)]
        time: Option<String>,

        /// Care step id to add or remove (repeatable, applied in order)
        #[arg(long, value_name = "ID")]
        toggle: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Take the skin quiz
    Quiz {
        /// Answer as QUESTION=VALUE (repeatable, in question order)
        #[arg(short, long, value_name = "QUESTION=VALUE")]
        answer: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default .velura.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    velura::fmt::set_emoji_enabled(!cli.no_emoji);
    let config = cli.config.as_deref();

    let result = match &cli.command {
        Some(Commands::Catalog {
            listing,
            category,
            json,
        }) => cmd::cmd_catalog(listing, category.as_deref(), *json, config),
        Some(Commands::Routine { time, toggle, json }) => {
            cmd::cmd_routine(time.as_deref(), toggle, *json, config)
        }
        Some(Commands::Quiz { answer, json }) => cmd::cmd_quiz(answer, *json, config),
        Some(Commands::Init { force }) => cmd::cmd_init(*force),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command(), &mut std::io::stdout());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("velura v{}", env!("CARGO_PKG_VERSION"));
            println!("Velura Botanical Skincare site core\n");
            println!("Usage: velura <COMMAND>\n");
            println!("Commands:");
            println!("  catalog  List care steps, products, ingredients or quiz questions");
            println!("  routine  Build a routine and show it for one time of day");
            println!("  quiz     Take the skin quiz");
            println!("  init     Write a default .velura.toml");
            println!("\nRun 'velura <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use velura::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
