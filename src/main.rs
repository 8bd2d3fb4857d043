//! Binary entrypoint for the userbadge CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml`
//! - `render <users.json>` - print display name and badges for every record in a JSON array
//! - `show --first <f> --last <l> [--admin] [--moderator] [--level <n>]` - render a single user
//!
//! See the library crate docs for module‑level details: `userbadge::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use userbadge::config::Config;
use userbadge::logutil::init_logging;
use userbadge::markup::HtmlRenderer;
use userbadge::render::{load_users, record_from_args, render_all, render_line};

#[derive(Parser)]
#[command(name = "userbadge")]
#[command(about = "Render display names and role badges for user records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Render every user in a JSON array file
    Render {
        /// Path to a JSON array of user records
        users: String,
    },
    /// Render a single user given on the command line
    Show {
        #[arg(long)]
        first: String,
        #[arg(long, default_value = "")]
        last: String,
        /// Show the staff badge
        #[arg(long)]
        admin: bool,
        /// Show the moderator badge
        #[arg(long)]
        moderator: bool,
        /// Numeric access level (5 = Moderator, 10 = Sysop)
        #[arg(long)]
        level: Option<u8>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(None, cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Render { users } => {
            let config = Config::load_or_default(&cli.config).await?;
            init_logging(Some(&config.logging), cli.verbose);
            let records = load_users(&users).await?;
            for line in render_all(&records, &HtmlRenderer, &config.badges)? {
                println!("{}", line);
            }
        }
        Commands::Show {
            first,
            last,
            admin,
            moderator,
            level,
        } => {
            let config = Config::load_or_default(&cli.config).await?;
            init_logging(Some(&config.logging), cli.verbose);
            let record = record_from_args(&first, &last, admin, moderator, level)?;
            println!("{}", render_line(&record, &HtmlRenderer, &config.badges)?);
        }
    }

    Ok(())
}
