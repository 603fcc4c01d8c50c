use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slotbook::data::{AppStateStore, Database, MemoryStore, ProfileField, SharedStore};
use slotbook::{util, App, BookingRepository, Config, ProfileRecord};

#[derive(Parser)]
#[command(name = "slotbook")]
#[command(version, about = "Book hourly slots on a weekly calendar from the terminal")]
struct Cli {
    /// Data directory (database, config and logs); defaults to ~/.slotbook
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file; defaults to <data-dir>/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep bookings and the profile in memory. The database is never
    /// opened and no default config is written; logs are still kept.
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookings
    Bookings {
        /// Print the stored JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show the user profile
    Profile {
        /// Print the stored JSON object
        #[arg(long)]
        json: bool,
    },
    /// Cancel a booking by id
    Cancel { id: i64 },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (<data-dir>/logs/slotbook.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None if cli.ephemeral => Config::load_from(&util::config_path()),
        None => Config::load(),
    };
    let store = open_store(cli.ephemeral)?;

    match cli.command {
        None => {
            slotbook::ui::install_panic_hook();
            let mut app = App::new(config, store);
            app.run().await
        }
        Some(Commands::Bookings { json }) => {
            let repo = BookingRepository::load(store);
            if repo.unreadable_count() > 0 {
                eprintln!(
                    "warning: {} stored booking(s) could not be read",
                    repo.unreadable_count()
                );
            }
            if json {
                println!("{}", serde_json::to_string_pretty(repo.list())?);
            } else if repo.is_empty() {
                println!("No bookings yet");
            } else {
                for booking in repo.list() {
                    println!(
                        "{}  {}  {}",
                        booking.id,
                        booking.label(),
                        booking.comment_or_placeholder().replace('\n', " ")
                    );
                }
            }
            Ok(())
        }
        Some(Commands::Profile { json }) => {
            let record = ProfileRecord::load(store);
            if json {
                println!("{}", serde_json::to_string_pretty(record.profile())?);
            } else {
                for field in ProfileField::ALL {
                    println!("{}: {}", field.key(), record.get(field));
                }
            }
            Ok(())
        }
        Some(Commands::Cancel { id }) => {
            let mut repo = BookingRepository::load(store)
                .with_unique_slots(config.enforce_unique_slots);
            match repo.remove(id)? {
                Some(removed) => println!("Cancelled {}", removed.label()),
                None => println!("No booking with id {id}"),
            }
            Ok(())
        }
    }
}

fn open_store(ephemeral: bool) -> Result<SharedStore> {
    if ephemeral {
        return Ok(MemoryStore::shared());
    }
    let path = util::database_path();
    let db = Database::open(path.clone())
        .with_context(|| format!("Failed to open database at {}", path.display()))?;
    Ok(Arc::new(AppStateStore::new(db.connection())))
}
